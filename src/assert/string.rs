//! String assertions

use super::{ensure, logged};
use crate::error::{AssertResult, AssertionError};
use crate::predicate::{self, Predicate};

/// Default message of [`assert_is_alphanumeric`].
pub const IS_ALPHANUMERIC: &str = "Value may only contain letters and digits.";
/// Default message of [`assert_is_alpha`].
pub const IS_ALPHA: &str = "Value may only contain letters.";
/// Default message of [`assert_is_charset`].
pub const IS_CHARSET: &str = "Value charset is not valid.";
/// Default message of [`assert_is_all_consonants`].
pub const IS_ALL_CONSONANTS: &str = "Value may only have consonants.";
/// Default message of [`assert_contains`].
pub const CONTAINS: &str = "Value was not found.";
/// Default message of [`assert_is_control_characters`].
pub const IS_CONTROL_CHARACTERS: &str = "Value may only have control characters.";
/// Default message of [`assert_is_digit`].
pub const IS_DIGIT: &str = "Value must be all digits.";
/// Default message of [`assert_has_graphical_chars_only`].
pub const HAS_GRAPHICAL_CHARS_ONLY: &str = "Value may only have graphical characters.";
/// Default message of [`assert_is_lowercase`].
pub const IS_LOWERCASE: &str = "Value may only contain lower-cased letters.";
/// Default message of [`assert_not_empty`].
pub const NOT_EMPTY: &str = "Value is empty.";
/// Default message of [`assert_no_whitespace`].
pub const NO_WHITESPACE: &str = "Value has white spaces.";
/// Default message of [`assert_has_printable_chars_only`].
pub const HAS_PRINTABLE_CHARS_ONLY: &str = "Value may only have printable characters.";
/// Default message of [`assert_is_punctuation`].
pub const IS_PUNCTUATION: &str = "Value may only have punctuation symbols.";
/// Default message of [`assert_matches_regex`].
pub const MATCHES_REGEX: &str = "Value format is invalid.";
/// Default message of [`assert_is_slug`].
pub const IS_SLUG: &str = "Value does not match a valid slug expression.";
/// Default message of [`assert_is_space`].
pub const IS_SPACE: &str = "Value is not a space.";
/// Default message of [`assert_is_uppercase`].
pub const IS_UPPERCASE: &str = "Value may only contain upper-cased letters.";
/// Default message of [`assert_is_version`].
pub const IS_VERSION: &str = "Value is not a valid version string.";
/// Default message of [`assert_is_vowel`].
pub const IS_VOWEL: &str = "Value may only contain vowels.";
/// Default message of [`assert_is_hex_digit`].
pub const IS_HEX_DIGIT: &str = "Value is not a valid hexadecimal value.";
/// Default message of [`assert_is_email`].
pub const IS_EMAIL: &str = "Value must be a valid email address.";
/// Default message of [`assert_is_url`].
pub const IS_URL: &str = "Value must be a valid URL.";
/// Default message of [`assert_is_uuid`].
pub const IS_UUID: &str = "Value must be a valid UUID.";

fn check<P: Predicate<str>>(
    value: &str,
    predicate: P,
    rule: &'static str,
    message: impl Into<String>,
) -> AssertResult {
    ensure(predicate.check(value), rule, message, value)
}

/// Letters and digits only.
pub fn assert_is_alphanumeric(value: &str) -> AssertResult {
    check(value, predicate::is_alphanumeric(), "is_alphanumeric", IS_ALPHANUMERIC)
}

/// Letters only.
pub fn assert_is_alpha(value: &str) -> AssertResult {
    check(value, predicate::is_alpha(), "is_alpha", IS_ALPHA)
}

/// Character count between `min` and `max`.
///
/// # Errors
///
/// `InvalidArgument` when `min > max`.
///
/// ```rust
/// use touchstone::assert::string::assert_is_between;
///
/// assert!(assert_is_between("日本語", 3, 3, true).is_ok());
/// assert_eq!(
///     assert_is_between("日本語", 3, 5, false).unwrap_err().to_string(),
///     "Value must be between 3 and 5 characters."
/// );
/// ```
pub fn assert_is_between(value: &str, min: usize, max: usize, inclusive: bool) -> AssertResult {
    if min > max {
        return Err(logged(AssertionError::invalid_argument(format!(
            "{min} cannot be larger than {max} for validation"
        ))));
    }
    check(
        value,
        predicate::len_between(min, max, inclusive),
        "is_between",
        format!("Value must be between {min} and {max} characters."),
    )
}

/// Raw bytes decode cleanly in one of `candidates`.
pub fn assert_is_charset(value: impl AsRef<[u8]>, candidates: &[&str]) -> AssertResult {
    let bytes = value.as_ref();
    let rule = predicate::is_charset(candidates.iter().copied());
    ensure(
        rule.check(bytes),
        "is_charset",
        IS_CHARSET,
        String::from_utf8_lossy(bytes),
    )
}

/// Consonants and whitespace only.
pub fn assert_is_all_consonants(value: &str) -> AssertResult {
    check(value, predicate::is_all_consonants(), "is_all_consonants", IS_ALL_CONSONANTS)
}

/// `needle` occurs in `value`.
pub fn assert_contains(value: &str, needle: &str, identical: bool) -> AssertResult {
    check(value, predicate::contains(needle, identical), "contains", CONTAINS)
}

/// ASCII control characters only.
pub fn assert_is_control_characters(value: &str) -> AssertResult {
    check(
        value,
        predicate::is_control_characters(),
        "is_control_characters",
        IS_CONTROL_CHARACTERS,
    )
}

/// ASCII digits only.
pub fn assert_is_digit(value: &str) -> AssertResult {
    check(value, predicate::is_digit(), "is_digit", IS_DIGIT)
}

/// `value` ends with `suffix`.
pub fn assert_ends_with(value: &str, suffix: &str, identical: bool) -> AssertResult {
    check(
        value,
        predicate::ends_with(suffix, identical),
        "ends_with",
        format!("Value does not end with {suffix}."),
    )
}

/// `value` equals `other`; loosely compares numbers by value.
pub fn assert_equals(value: &str, other: &str, identical: bool) -> AssertResult {
    check(
        value,
        predicate::equals(other, identical),
        "equals",
        format!("Value and {other} must match."),
    )
}

/// `value` occurs within `haystack`.
pub fn assert_in(value: &str, haystack: &str, identical: bool) -> AssertResult {
    check(
        value,
        predicate::in_haystack(haystack, identical),
        "in",
        format!("The selected {value} is invalid."),
    )
}

/// Visible ASCII characters only.
pub fn assert_has_graphical_chars_only(value: &str) -> AssertResult {
    check(
        value,
        predicate::has_graphical_chars_only(),
        "has_graphical_chars_only",
        HAS_GRAPHICAL_CHARS_ONLY,
    )
}

/// Exactly `length` characters.
pub fn assert_has_length(value: &str, length: usize) -> AssertResult {
    check(
        value,
        predicate::has_length(length),
        "has_length",
        format!("Value must be {length} characters."),
    )
}

/// Equal to its own lower-case mapping.
pub fn assert_is_lowercase(value: &str) -> AssertResult {
    check(value, predicate::is_lowercase(), "is_lowercase", IS_LOWERCASE)
}

/// Something other than whitespace.
pub fn assert_not_empty(value: &str) -> AssertResult {
    check(value, predicate::not_empty(), "not_empty", NOT_EMPTY)
}

/// No whitespace anywhere.
pub fn assert_no_whitespace(value: &str) -> AssertResult {
    check(value, predicate::no_whitespace(), "no_whitespace", NO_WHITESPACE)
}

/// Printable ASCII characters only.
pub fn assert_has_printable_chars_only(value: &str) -> AssertResult {
    check(
        value,
        predicate::has_printable_chars_only(),
        "has_printable_chars_only",
        HAS_PRINTABLE_CHARS_ONLY,
    )
}

/// ASCII punctuation only.
pub fn assert_is_punctuation(value: &str) -> AssertResult {
    check(value, predicate::is_punctuation(), "is_punctuation", IS_PUNCTUATION)
}

/// `value` matches `pattern`.
///
/// # Errors
///
/// `InvalidArgument` when `pattern` is not a valid regular expression.
pub fn assert_matches_regex(value: &str, pattern: &str) -> AssertResult {
    let rule = predicate::matches_regex(pattern).map_err(logged)?;
    check(value, rule, "matches_regex", MATCHES_REGEX)
}

/// Lower-case, digits and single inner hyphens.
pub fn assert_is_slug(value: &str) -> AssertResult {
    check(value, predicate::is_slug(), "is_slug", IS_SLUG)
}

/// ASCII whitespace only.
pub fn assert_is_space(value: &str) -> AssertResult {
    check(value, predicate::is_space(), "is_space", IS_SPACE)
}

/// `value` starts with `prefix`.
pub fn assert_starts_with(value: &str, prefix: &str, identical: bool) -> AssertResult {
    check(
        value,
        predicate::starts_with(prefix, identical),
        "starts_with",
        format!("Value does not start with {prefix}."),
    )
}

/// Equal to its own upper-case mapping.
pub fn assert_is_uppercase(value: &str) -> AssertResult {
    check(value, predicate::is_uppercase(), "is_uppercase", IS_UPPERCASE)
}

/// A `major.minor[.patch][-pre|+build]` version string.
pub fn assert_is_version(value: &str) -> AssertResult {
    check(value, predicate::is_version(), "is_version", IS_VERSION)
}

/// Vowels and whitespace only.
pub fn assert_is_vowel(value: &str) -> AssertResult {
    check(value, predicate::is_vowel(), "is_vowel", IS_VOWEL)
}

/// ASCII hexadecimal digits only.
pub fn assert_is_hex_digit(value: &str) -> AssertResult {
    check(value, predicate::is_hex_digit(), "is_hex_digit", IS_HEX_DIGIT)
}

/// At least `amount` lower-case letters; `None` or `0` means one.
///
/// ```rust
/// use touchstone::assert::assert_has_lowercase;
///
/// assert!(assert_has_lowercase("aBc", Some(2)).is_ok());
/// assert_eq!(
///     assert_has_lowercase("ABC", None).unwrap_err().to_string(),
///     "Value does not have at least 1 lower-cased characters."
/// );
/// ```
pub fn assert_has_lowercase(value: &str, amount: Option<usize>) -> AssertResult {
    let rule = predicate::has_lowercase(amount.unwrap_or(1));
    let message = format!(
        "Value does not have at least {} lower-cased characters.",
        rule.amount()
    );
    check(value, rule, "has_lowercase", message)
}

/// At least `amount` upper-case letters; `None` or `0` means one.
pub fn assert_has_uppercase(value: &str, amount: Option<usize>) -> AssertResult {
    let rule = predicate::has_uppercase(amount.unwrap_or(1));
    let message = format!(
        "Value does not have at least {} upper-cased characters.",
        rule.amount()
    );
    check(value, rule, "has_uppercase", message)
}

/// At least `amount` digits; `None` or `0` means one.
pub fn assert_has_numeric(value: &str, amount: Option<usize>) -> AssertResult {
    let rule = predicate::has_numeric(amount.unwrap_or(1));
    let message = format!(
        "Value does not have at least {} numeric characters.",
        rule.amount()
    );
    check(value, rule, "has_numeric", message)
}

/// At least `amount` special characters; `None` or `0` means one.
pub fn assert_has_special_characters(value: &str, amount: Option<usize>) -> AssertResult {
    let rule = predicate::has_special_characters(amount.unwrap_or(1));
    let message = format!(
        "Value does not have at least {} special characters.",
        rule.amount()
    );
    check(value, rule, "has_special_characters", message)
}

/// An e-mail address.
pub fn assert_is_email(value: &str) -> AssertResult {
    check(value, predicate::is_email(), "is_email", IS_EMAIL)
}

/// An absolute URL with an explicit path.
pub fn assert_is_url(value: &str) -> AssertResult {
    check(value, predicate::is_url(), "is_url", IS_URL)
}

/// A UUID; `strict` requires the canonical hyphenated form.
pub fn assert_is_uuid(value: &str, strict: bool) -> AssertResult {
    check(value, predicate::is_uuid(strict), "is_uuid", IS_UUID)
}
