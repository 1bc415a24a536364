//! Predicate prelude for convenient imports
//!
//! ```rust
//! use touchstone::predicate::prelude::*;
//!
//! let tag = is_slug().and(len_between(1, 20, true));
//! assert!(tag.check("release-notes"));
//! ```

pub use super::combinators::{Predicate, PredicateExt};

pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

pub use super::string::{
    contains, ends_with, equals, has_length, has_lowercase, has_numeric, has_special_characters,
    has_uppercase, in_haystack, is_alpha, is_alphanumeric, is_charset, is_digit, is_email,
    is_lowercase, is_slug, is_uppercase, is_url, is_uuid, is_version, len_between,
    matches_regex, no_whitespace, not_empty, starts_with,
};

pub use super::validation::{validate, validate_with};
