//! Core predicate trait and logical combinators
//!
//! Every rule in this crate is a [`Predicate`]: a stateless check that answers
//! `true` or `false` for a value. Rules compose with `and`, `or` and `not`, and
//! homogeneous groups of rules compose with [`all_of`], [`any_of`] and [`none_of`].

/// A composable predicate over values of type `T`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let username = is_alphanumeric().and(len_between(3, 16, true));
/// assert!(username.check("alice42"));
/// assert!(!username.check("al"));
/// assert!(!username.check("alice_42"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// `true` when the rule holds for `value`.
    fn check(&self, value: &T) -> bool;
}

// Any `Fn(&T) -> bool` is a rule
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// `and`, `or` and `not` for every predicate.
///
/// All methods return concrete types, so a composed rule costs no more than
/// the hand-written boolean expression.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both predicates must hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use touchstone::predicate::*;
    ///
    /// let p = is_lowercase().and(no_whitespace());
    /// assert!(p.check("hello"));
    /// assert!(!p.check("hello world"));
    /// assert!(!p.check("Hello"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use touchstone::predicate::*;
    ///
    /// let p = is_digit().or(is_hex_digit());
    /// assert!(p.check("123"));
    /// assert!(p.check("cafe"));
    /// assert!(!p.check("coffee"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use touchstone::predicate::*;
    ///
    /// let p = contains("admin", false).not();
    /// assert!(p.check("alice"));
    /// assert!(!p.check("SysAdmin"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction built by [`PredicateExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Disjunction built by [`PredicateExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Negation built by [`PredicateExt::not`].
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Every predicate in a fixed-size array must hold.
///
/// Requires homogeneous predicate types; chain `.and()` for mixed rules.
#[derive(Clone, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that holds when all given predicates hold.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// // A password needs one of each class
/// let strong = all_of([has_lowercase(1), has_uppercase(1), has_numeric(1)]);
/// assert!(strong.check("Passw0rd"));
/// assert!(!strong.check("password"));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// At least one predicate in a fixed-size array must hold.
#[derive(Clone, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that holds when any given predicate holds.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let image_name = any_of([ends_with(".png", false), ends_with(".jpg", false)]);
/// assert!(image_name.check("cat.PNG"));
/// assert!(!image_name.check("cat.gif"));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// No predicate in a fixed-size array may hold.
#[derive(Clone, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that holds when none of the given predicates hold.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let clean = none_of([contains("<script", false), contains("javascript:", false)]);
/// assert!(clean.check("hello"));
/// assert!(!clean.check("<SCRIPT>alert(1)</script>"));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
