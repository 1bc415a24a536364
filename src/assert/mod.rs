//! Assertion facade
//!
//! One `assert_<rule>` function per rule, returning `Ok(())` when the rule
//! holds and an [`AssertionError`] when it does not. Default messages live
//! next to each family as constants; override them per call with
//! [`AssertResultExt::with_message`](crate::AssertResultExt::with_message).
//!
//! The three families live in [`string`], [`datetime`] and [`upload`], and
//! most assertions are re-exported here. `assert_is_between` and
//! `assert_has_length` exist in more than one family: the names at this level
//! are the string versions.
//!
//! # Example
//!
//! ```rust
//! use touchstone::assert::{self, assert_is_email, assert_is_monday};
//! use touchstone::ErrorKind;
//!
//! assert!(assert_is_email("ada@example.org").is_ok());
//! assert!(assert::string::assert_is_between("Ada", 1, 10, true).is_ok());
//!
//! let err = assert_is_monday("2024-03-15").unwrap_err();
//! assert_eq!(err.to_string(), "Day provided is not Monday.");
//!
//! let err = assert::datetime::assert_is_between("soon", "2024-01-01", "2025-01-01", true)
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidDate);
//! ```

pub mod datetime;
pub mod string;
pub mod upload;

use crate::error::{AssertResult, AssertionError};

pub use string::*;

pub use datetime::{
    assert_is_afternoon, assert_is_after, assert_is_before, assert_is_date_time,
    assert_is_evening, assert_is_friday, assert_is_leap_year, assert_is_monday,
    assert_is_morning, assert_is_night, assert_is_saturday, assert_is_sunday,
    assert_is_thursday, assert_is_today, assert_is_tomorrow, assert_is_tuesday,
    assert_is_wednesday, assert_is_weekday, assert_is_weekend, assert_is_yesterday,
};

pub use upload::{
    assert_has_file_name_format, assert_has_valid_upload_directory,
    assert_is_between_file_size, assert_is_image, assert_is_mime_type, assert_is_uploaded,
    assert_not_overwriting_existing_file,
};

/// Turn a rule outcome into an assertion result.
pub(crate) fn ensure(
    passed: bool,
    rule: &'static str,
    message: impl Into<String>,
    value: impl ToString,
) -> AssertResult {
    if passed {
        Ok(())
    } else {
        traced(Err(AssertionError::failed(rule, message, value)))
    }
}

/// Emit the failure event and pass the result through.
pub(crate) fn traced(result: AssertResult) -> AssertResult {
    result.map_err(logged)
}

/// Emit the failure event for an error raised before the rule could decide.
pub(crate) fn logged(err: AssertionError) -> AssertionError {
    emit(&err);
    err
}

#[cfg(feature = "tracing")]
fn emit(err: &AssertionError) {
    match err {
        AssertionError::UploadLimitExceeded {
            upload,
            size,
            limit,
        } => tracing::warn!(
            upload = %upload,
            size = *size,
            limit = *limit,
            "upload rejected by server size limit"
        ),
        other => tracing::debug!(
            rule = other.rule().unwrap_or("-"),
            kind = ?other.kind(),
            "assertion failed: {}",
            other
        ),
    }
}

#[cfg(not(feature = "tracing"))]
fn emit(_: &AssertionError) {}
