//! # Touchstone
//!
//! Declarative assertions for strings, dates and file uploads.
//!
//! Every rule is a pure check over a value. The `assert_*` facade turns a
//! rule that does not hold into a structured [`AssertionError`], so callers
//! can short-circuit with `?` or collect every failure with [`Validation`].
//!
//! - [`predicate`]: composable string rules (`is_slug`, `has_lowercase`, ...)
//! - [`datetime`]: date parsing, ordering, calendar and time-of-day rules
//! - [`upload`]: rules over uploaded files, with injected server limits and
//!   MIME detection
//! - [`assert`]: one `assert_*` function per rule
//!
//! ## Quick Example
//!
//! ```rust
//! use touchstone::assert::*;
//! use touchstone::{AssertResult, Validation};
//!
//! fn username(value: &str) -> AssertResult {
//!     assert_not_empty(value)?;
//!     assert_is_slug(value)?;
//!     assert_is_between(value, 3, 20, true)
//! }
//!
//! assert!(username("ada-lovelace").is_ok());
//! assert!(username("Ada Lovelace").is_err());
//!
//! // Collect every failure instead of stopping at the first
//! let password = "hunter2";
//! let result = Validation::success(password)
//!     .check(assert_has_uppercase(password, None))
//!     .check(assert_has_numeric(password, Some(2)))
//!     .check(assert_has_special_characters(password, None));
//!
//! match result {
//!     Validation::Success(p) => println!("accepted {p}"),
//!     Validation::Failure(failures) => {
//!         for failure in failures.iter() {
//!             println!("{failure}");
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assert;
pub mod datetime;
pub mod error;
pub mod predicate;
pub mod testing;
pub mod upload;
pub mod validation;

// Re-exports
pub use error::{AssertResult, AssertResultExt, AssertionError, ErrorKind};
pub use validation::{Failures, Validation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::datetime::{Clock, DateValue, FixedClock, SystemClock, ToDateValue};
    pub use crate::error::{AssertResult, AssertResultExt, AssertionError, ErrorKind};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::upload::{
        MagicSniffer, MimeSniffer, ServerLimitProvider, ServerLimits, UploadSlot, UploadSource,
        UploadedFile,
    };
    pub use crate::validation::{Failures, ValidateAll, Validation};
}
