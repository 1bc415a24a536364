//! Composable string rules
//!
//! Every rule here is a [`Predicate`]: a small, stateless value whose `check`
//! answers `true` or `false`. Rules can be combined with `and`, `or` and `not`
//! and turned into assertions with [`validate`] or [`validate_with`].
//!
//! # Example
//!
//! ```rust
//! use touchstone::predicate::*;
//!
//! let handle = is_slug().and(len_between(3, 32, true));
//! assert!(handle.check("rust-lang"));
//! assert!(!handle.check("rs"));
//!
//! let password = all_of([has_lowercase(1), has_uppercase(1), has_numeric(2)]);
//! assert!(password.check("Secr3t 42"));
//! assert!(!password.check("secret"));
//! ```
//!
//! # Assertions
//!
//! ```rust
//! use touchstone::predicate::*;
//!
//! let result = validate("Not-A-Slug", is_slug(), "is_slug", "invalid slug");
//! assert_eq!(result.unwrap_err().to_string(), "invalid slug");
//! ```

mod combinators;
mod string;
mod validation;

pub mod prelude;

pub use combinators::{Predicate, PredicateExt};

pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

pub use string::{
    contains, ends_with, equals, has_at_least, has_graphical_chars_only, has_length,
    has_lowercase, has_numeric, has_printable_chars_only, has_special_characters, has_uppercase,
    in_haystack, is_all_consonants, is_alpha, is_alphanumeric, is_charset,
    is_control_characters, is_digit, is_email, is_hex_digit, is_lowercase, is_punctuation,
    is_slug, is_space, is_uppercase, is_url, is_uuid, is_version, is_vowel, len_between,
    matches_regex, no_whitespace, not_empty, starts_with, CharClass, CharSubset, Contains,
    EndsWith, Equals, HasAtLeast, HasLength, InHaystack, IsAllConsonants, IsAlpha,
    IsAlphanumeric, IsCharset, IsEmail, IsLowercase, IsSlug, IsUppercase, IsUrl, IsUuid,
    IsVersion, IsVowel, LenBetween, MatchesRegex, NoWhitespace, NotEmpty, OnlyClass, StartsWith,
};

pub use validation::{validate, validate_with};
