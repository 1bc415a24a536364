//! Turning predicates into assertions
//!
//! A predicate answers `bool`; an assertion answers [`AssertResult`]. These two
//! helpers bridge the gap and are what the [`crate::assert`] facade is built on.

use std::fmt::Display;

use super::combinators::Predicate;
use crate::error::{AssertResult, AssertionError};

/// Assert that `value` satisfies `predicate`.
///
/// On failure returns [`AssertionError::Failed`] carrying `rule`, `message`
/// and the rendered value.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(validate("hello", is_lowercase(), "is_lowercase", "must be lower-case").is_ok());
///
/// let err = validate("Hello", is_lowercase(), "is_lowercase", "must be lower-case").unwrap_err();
/// assert_eq!(err.to_string(), "must be lower-case");
/// assert_eq!(err.value(), Some("Hello"));
/// ```
pub fn validate<T, P>(value: &T, predicate: P, rule: &'static str, message: &str) -> AssertResult
where
    T: Display + ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Ok(())
    } else {
        Err(AssertionError::failed(rule, message, value))
    }
}

/// Assert that `value` satisfies `predicate`, building the error lazily.
///
/// Useful when the message needs the value, or when `T` has no `Display`.
///
/// # Example
///
/// ```rust
/// use touchstone::AssertionError;
/// use touchstone::predicate::*;
///
/// let bytes = "café".as_bytes();
/// let result = validate_with(bytes, is_charset(["ASCII"]), |b| {
///     AssertionError::failed("is_charset", "not ASCII", String::from_utf8_lossy(b))
/// });
/// assert_eq!(result.unwrap_err().value(), Some("café"));
/// ```
pub fn validate_with<T, P, F>(value: &T, predicate: P, error_fn: F) -> AssertResult
where
    T: ?Sized,
    P: Predicate<T>,
    F: FnOnce(&T) -> AssertionError,
{
    if predicate.check(value) {
        Ok(())
    } else {
        Err(error_fn(value))
    }
}
