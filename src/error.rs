//! Structured assertion failures
//!
//! Every assertion in this crate either returns `Ok(())` or an [`AssertionError`].
//! The error distinguishes between a predicate that evaluated to `false`
//! ([`AssertionError::Failed`]), an upload rejected by the server-imposed size
//! ceiling ([`AssertionError::UploadLimitExceeded`]), input that could not be
//! parsed before any rule ran ([`AssertionError::InvalidDate`]) and a call that
//! was malformed to begin with ([`AssertionError::InvalidArgument`]).
//!
//! # Example
//!
//! ```rust
//! use touchstone::assert::assert_is_slug;
//! use touchstone::{AssertResultExt, ErrorKind};
//!
//! let err = assert_is_slug("Not A Slug")
//!     .with_message("pick a lower-case, hyphenated name")
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::Failed);
//! assert_eq!(err.to_string(), "pick a lower-case, hyphenated name");
//! ```

use thiserror::Error;

/// Result alias used by every assertion.
pub type AssertResult<T = ()> = Result<T, AssertionError>;

/// A failed assertion.
///
/// Errors are plain values: they are created by the rule that failed and then
/// owned by whoever receives them. The crate never retains or logs them beyond
/// the optional `tracing` events emitted at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The rule was evaluated and did not hold.
    #[error("{message}")]
    Failed {
        /// Name of the rule, e.g. `"is_slug"`.
        rule: &'static str,
        /// Human-readable message, either the rule default or a caller override.
        message: String,
        /// Rendering of the offending value.
        value: String,
    },

    /// An uploaded file is larger than the server allows.
    ///
    /// Raised instead of [`AssertionError::Failed`] when the server ceiling, not
    /// the caller-supplied bound, is what rejected the file.
    #[error("upload '{upload}' is {size} bytes, exceeding the server limit of {limit} bytes")]
    UploadLimitExceeded {
        /// Upload slot name.
        upload: String,
        /// Declared size of the offending record in bytes.
        size: u64,
        /// Effective server ceiling in bytes.
        limit: u64,
    },

    /// A date-like input could not be normalised to an instant.
    #[error("Value is not a valid date: '{input}'")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// The assertion was called with arguments that make it meaningless.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Discriminant of [`AssertionError`], convenient for matching in tests and callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`AssertionError::Failed`].
    Failed,
    /// See [`AssertionError::UploadLimitExceeded`].
    UploadLimitExceeded,
    /// See [`AssertionError::InvalidDate`].
    InvalidDate,
    /// See [`AssertionError::InvalidArgument`].
    InvalidArgument,
}

impl AssertionError {
    /// Build a [`AssertionError::Failed`].
    pub fn failed(rule: &'static str, message: impl Into<String>, value: impl ToString) -> Self {
        AssertionError::Failed {
            rule,
            message: message.into(),
            value: value.to_string(),
        }
    }

    /// Build an [`AssertionError::InvalidDate`].
    pub fn invalid_date(input: impl Into<String>) -> Self {
        AssertionError::InvalidDate {
            input: input.into(),
        }
    }

    /// Build an [`AssertionError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AssertionError::InvalidArgument(message.into())
    }

    /// The kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssertionError::Failed { .. } => ErrorKind::Failed,
            AssertionError::UploadLimitExceeded { .. } => ErrorKind::UploadLimitExceeded,
            AssertionError::InvalidDate { .. } => ErrorKind::InvalidDate,
            AssertionError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Name of the failed rule, if this is a [`AssertionError::Failed`].
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            AssertionError::Failed { rule, .. } => Some(rule),
            _ => None,
        }
    }

    /// Rendering of the offending value, where one is recorded.
    pub fn value(&self) -> Option<&str> {
        match self {
            AssertionError::Failed { value, .. } => Some(value),
            AssertionError::UploadLimitExceeded { upload, .. } => Some(upload),
            AssertionError::InvalidDate { input } => Some(input),
            AssertionError::InvalidArgument(_) => None,
        }
    }

    /// Replace the message of a [`AssertionError::Failed`].
    ///
    /// Other kinds are returned untouched: overriding the text of a parse
    /// failure or a server rejection would hide what actually went wrong.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            AssertionError::Failed { rule, value, .. } => AssertionError::Failed {
                rule,
                message: message.into(),
                value,
            },
            other => other,
        }
    }
}

/// Extension methods on assertion results.
pub trait AssertResultExt {
    /// Override the default failure message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use touchstone::assert::assert_not_empty;
    /// use touchstone::AssertResultExt;
    ///
    /// let err = assert_not_empty("   ").with_message("name is required").unwrap_err();
    /// assert_eq!(err.to_string(), "name is required");
    /// ```
    fn with_message(self, message: impl Into<String>) -> Self;
}

impl<T> AssertResultExt for AssertResult<T> {
    fn with_message(self, message: impl Into<String>) -> Self {
        self.map_err(|err| err.with_message(message))
    }
}
