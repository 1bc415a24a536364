//! Testing utilities for code built on touchstone
//!
//! Assertion macros that read better than `assert!(result.is_ok())` and print
//! the failure when they panic, plus `proptest` strategies behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use touchstone::assert::{assert_is_slug, assert_matches_regex};
//! use touchstone::{assert_fails, assert_fails_with, assert_passes, ErrorKind};
//!
//! assert_passes!(assert_is_slug("hello-world"));
//! assert_fails!(assert_is_slug("Hello World"));
//! assert_fails_with!(assert_matches_regex("x", "("), ErrorKind::InvalidArgument);
//! ```

/// Assert that an assertion or validation passed.
///
/// Works on any `Result` whose error is `Display`, so a
/// [`Validation`](crate::Validation) can be checked after `into_result()`.
///
/// # Example
///
/// ```rust
/// use touchstone::{assert_passes, assert::assert_is_email};
///
/// assert_passes!(assert_is_email("ada@example.org"));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected assertion to pass, got: {}", e);
            }
        }
    };
}

/// Assert that an assertion failed, whatever the kind.
///
/// # Example
///
/// ```rust
/// use touchstone::{assert_fails, assert::assert_is_email};
///
/// assert_fails!(assert_is_email("not an email"));
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(v) => {
                panic!("Expected assertion to fail, got Ok({:?})", v);
            }
        }
    };
}

/// Assert that an assertion failed with a specific [`ErrorKind`](crate::ErrorKind).
///
/// # Example
///
/// ```rust
/// use touchstone::{assert_fails_with, assert::assert_is_monday, ErrorKind};
///
/// assert_fails_with!(assert_is_monday("2024-03-15"), ErrorKind::Failed);
/// assert_fails_with!(assert_is_monday("someday"), ErrorKind::InvalidDate);
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($result:expr, $kind:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.kind(), $kind, "unexpected failure: {}", e);
            }
            ::core::result::Result::Ok(v) => {
                panic!("Expected {:?} failure, got Ok({:?})", $kind, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::datetime::DateValue;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Years 1900 through 2399, which cover every leap-year rule.
#[cfg(feature = "proptest")]
const MIN_TIMESTAMP: i64 = -2_208_988_800;
#[cfg(feature = "proptest")]
const MAX_TIMESTAMP: i64 = 13_569_465_599;

#[cfg(feature = "proptest")]
impl Arbitrary for DateValue {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use chrono::{DateTime, FixedOffset};

        (MIN_TIMESTAMP..=MAX_TIMESTAMP, -12i32 * 4..=14 * 4)
            .prop_filter_map("timestamp out of chrono range", |(secs, quarters)| {
                let offset = FixedOffset::east_opt(quarters * 15 * 60)?;
                let utc = DateTime::from_timestamp(secs, 0)?;
                Some(DateValue::from(utc.with_timezone(&offset)))
            })
            .boxed()
    }
}
