//! Accumulating assertion failures
//!
//! The `assert_*` functions short-circuit: combined with `?`, the first failure
//! stops the caller. [`Validation`] is the other mode: every assertion is run
//! and every failure is kept, in order, so a form can report all of its
//! problems at once.
//!
//! # Examples
//!
//! ## Checking one value against several rules
//!
//! ```
//! use touchstone::assert::*;
//! use touchstone::Validation;
//!
//! let username = "Bob Smith";
//! let result = Validation::success(username)
//!     .check(assert_is_slug(username))
//!     .check(assert_is_between(username, 3, 8, true))
//!     .check(assert_not_empty(username));
//!
//! let failures = result.into_result().unwrap_err();
//! assert_eq!(failures.len(), 2);
//! assert_eq!(failures.first().rule(), Some("is_slug"));
//! ```
//!
//! ## Combining independent fields
//!
//! ```
//! use touchstone::assert::*;
//! use touchstone::validation::{ValidateAll, Validation};
//!
//! let email = Validation::success("ada@example.org").check(assert_is_email("ada@example.org"));
//! let born = Validation::success("1815-12-10").check(assert_is_before("1815-12-10", "2000-01-01", false));
//!
//! let (email, born) = (email, born).validate_all().into_result().unwrap();
//! assert_eq!(email, "ada@example.org");
//! assert_eq!(born, "1815-12-10");
//! ```

use std::fmt;

use crate::error::{AssertResult, AssertionError};

/// One or more assertion failures, in the order they were found.
///
/// Never empty: a `Failures` only exists because something failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failures {
    first: AssertionError,
    rest: Vec<AssertionError>,
}

impl Failures {
    /// A single failure.
    pub fn new(first: AssertionError) -> Self {
        Failures {
            first,
            rest: Vec::new(),
        }
    }

    /// Collect failures, or `None` if there are none.
    pub fn from_vec(mut errors: Vec<AssertionError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let first = errors.remove(0);
        Some(Failures {
            first,
            rest: errors,
        })
    }

    /// The earliest failure.
    pub fn first(&self) -> &AssertionError {
        &self.first
    }

    /// Number of failures, at least one.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Add a failure at the end.
    pub fn push(&mut self, error: AssertionError) {
        self.rest.push(error);
    }

    /// Append every failure of `other`.
    pub fn extend(&mut self, other: Failures) {
        self.rest.push(other.first);
        self.rest.extend(other.rest);
    }

    /// Iterate in order.
    pub fn iter(&self) -> impl Iterator<Item = &AssertionError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// The failures as a `Vec`.
    pub fn into_vec(self) -> Vec<AssertionError> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

impl From<AssertionError> for Failures {
    fn from(error: AssertionError) -> Self {
        Failures::new(error)
    }
}

impl IntoIterator for Failures {
    type Item = AssertionError;
    type IntoIter = std::vec::IntoIter<AssertionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl fmt::Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Failures {}

/// A value that either passed every assertion or the failures collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    /// Every assertion held.
    Success(T),
    /// At least one assertion failed.
    Failure(Failures),
}

impl<T> Validation<T> {
    /// Start from a valid value.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Start from a single failure.
    #[inline]
    pub fn failure(error: AssertionError) -> Self {
        Validation::Failure(Failures::new(error))
    }

    /// Lift an assertion result.
    pub fn from_result(result: AssertResult<T>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::failure(error),
        }
    }

    /// Back to a `Result`, with every failure on the error side.
    pub fn into_result(self) -> Result<T, Failures> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(failures) => Err(failures),
        }
    }

    /// `true` when no assertion failed.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// `true` when at least one assertion failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the valid value.
    pub fn map<U, F>(self, f: F) -> Validation<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(failures) => Validation::Failure(failures),
        }
    }

    /// Record the outcome of one more assertion.
    ///
    /// A failing `result` is appended; the value is kept otherwise.
    pub fn check(self, result: AssertResult) -> Self {
        match (self, result) {
            (valid, Ok(())) => valid,
            (Validation::Success(_), Err(error)) => Validation::failure(error),
            (Validation::Failure(mut failures), Err(error)) => {
                failures.push(error);
                Validation::Failure(failures)
            }
        }
    }

    /// Run an assertion against the value, if it is still valid.
    ///
    /// Unlike [`Validation::check`], `f` is skipped after a failure.
    pub fn check_with<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> AssertResult,
    {
        match self {
            Validation::Success(value) => match f(&value) {
                Ok(()) => Validation::Success(value),
                Err(error) => Validation::failure(error),
            },
            failure => failure,
        }
    }

    /// Pair two validations, keeping the failures of both.
    pub fn and<U>(self, other: Validation<U>) -> Validation<(T, U)> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e), Validation::Success(_))
            | (Validation::Success(_), Validation::Failure(e)) => Validation::Failure(e),
            (Validation::Failure(mut e1), Validation::Failure(e2)) => {
                e1.extend(e2);
                Validation::Failure(e1)
            }
        }
    }

    /// Chain a dependent validation. Short-circuits on failure.
    pub fn and_then<U, F>(self, f: F) -> Validation<U>
    where
        F: FnOnce(T) -> Validation<U>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(failures) => Validation::Failure(failures),
        }
    }

    /// Gather many results, keeping every failure.
    ///
    /// ```
    /// use touchstone::assert::assert_is_email;
    /// use touchstone::Validation;
    ///
    /// let emails = ["a@b.io", "nope", "c@d.io", "also nope"];
    /// let result = Validation::all(emails.iter().map(|e| assert_is_email(e).map(|_| *e)));
    ///
    /// let failures = result.into_result().unwrap_err();
    /// let bad: Vec<_> = failures.iter().filter_map(|f| f.value()).collect();
    /// assert_eq!(bad, ["nope", "also nope"]);
    /// ```
    pub fn all<I>(results: I) -> Validation<Vec<T>>
    where
        I: IntoIterator<Item = AssertResult<T>>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(value) => values.push(value),
                Err(error) => errors.push(error),
            }
        }
        match Failures::from_vec(errors) {
            None => Validation::Success(values),
            Some(failures) => Validation::Failure(failures),
        }
    }
}

impl<T> From<AssertResult<T>> for Validation<T> {
    fn from(result: AssertResult<T>) -> Self {
        Validation::from_result(result)
    }
}

/// Combine a tuple of validations into a validation of a tuple.
pub trait ValidateAll {
    /// Tuple of the valid values.
    type Output;

    /// Succeed only if every element succeeded; otherwise collect every failure.
    fn validate_all(self) -> Validation<Self::Output>;
}

macro_rules! impl_validate_all {
    ($($t:ident => $v:ident),+) => {
        impl<$($t),+> ValidateAll for ($(Validation<$t>,)+) {
            type Output = ($($t,)+);

            fn validate_all(self) -> Validation<Self::Output> {
                let ($($v,)+) = self;
                let mut failures: Option<Failures> = None;
                $(
                    let $v = match $v {
                        Validation::Success(value) => Some(value),
                        Validation::Failure(e) => {
                            match failures.as_mut() {
                                Some(all) => all.extend(e),
                                None => failures = Some(e),
                            }
                            None
                        }
                    };
                )+
                match failures {
                    Some(failures) => Validation::Failure(failures),
                    None => match ($($v,)+) {
                        ($(Some($v),)+) => Validation::Success(($($v,)+)),
                        #[allow(unreachable_patterns)]
                        _ => unreachable!("no failures recorded but a value is missing"),
                    },
                }
            }
        }
    };
}

impl_validate_all!(A => a);
impl_validate_all!(A => a, B => b);
impl_validate_all!(A => a, B => b, C => c);
impl_validate_all!(A => a, B => b, C => c, D => d);
impl_validate_all!(A => a, B => b, C => c, D => d, E => e);
impl_validate_all!(A => a, B => b, C => c, D => d, E => e, F => f);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fail(rule: &'static str) -> AssertionError {
        AssertionError::failed(rule, format!("{rule} failed"), "x")
    }

    #[test]
    fn test_check_accumulates_in_order() {
        let v = Validation::success(1)
            .check(Err(fail("a")))
            .check(Ok(()))
            .check(Err(fail("b")));
        let failures = v.into_result().unwrap_err();
        let rules: Vec<_> = failures.iter().filter_map(AssertionError::rule).collect();
        assert_eq!(rules, ["a", "b"]);
        assert_eq!(failures.to_string(), "a failed; b failed");
    }

    #[test]
    fn test_check_with_skips_after_failure() {
        let mut called = false;
        let v = Validation::<i32>::failure(fail("a")).check_with(|_| {
            called = true;
            Ok(())
        });
        assert!(v.is_failure());
        assert!(!called);
    }

    #[test]
    fn test_and_merges_failures() {
        let left = Validation::<i32>::failure(fail("a"));
        let right = Validation::<i32>::failure(fail("b"));
        assert_eq!(left.and(right).into_result().unwrap_err().len(), 2);

        let ok = Validation::success(1).and(Validation::success("x"));
        assert_eq!(ok, Validation::Success((1, "x")));
    }

    #[test]
    fn test_all() {
        let v = Validation::all(vec![Ok(1), Ok(2)]);
        assert_eq!(v, Validation::Success(vec![1, 2]));

        let v = Validation::all(vec![Ok(1), Err(AssertionError::invalid_date("?")), Ok(3)]);
        let failures = v.into_result().unwrap_err();
        assert_eq!(failures.first().kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn test_validate_all_tuple() {
        let all = (
            Validation::success(1),
            Validation::<&str>::failure(fail("a")),
            Validation::<bool>::failure(fail("b")),
        )
            .validate_all();
        assert_eq!(all.into_result().unwrap_err().len(), 2);

        let all = (Validation::success(1), Validation::success('c')).validate_all();
        assert_eq!(all, Validation::Success((1, 'c')));
    }

    #[test]
    fn test_failures_from_vec() {
        assert!(Failures::from_vec(vec![]).is_none());
        let failures = Failures::from_vec(vec![fail("a"), fail("b")]).unwrap();
        assert_eq!(failures.into_vec().len(), 2);
    }
}
