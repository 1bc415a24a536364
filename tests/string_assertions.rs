//! Integration tests for the string assertions

use touchstone::assert::*;
use touchstone::predicate::{self, Predicate, PredicateExt};
use touchstone::{assert_fails, assert_fails_with, assert_passes, AssertResultExt, ErrorKind};

#[test]
fn test_substring_rules_honour_identical_flag() {
    assert_passes!(assert_contains("Hello World", "world", false));
    assert_fails!(assert_contains("Hello World", "world", true));
    assert_passes!(assert_contains("Hello World", "World", true));

    assert_passes!(assert_starts_with("Ünïcode", "üNÏ", false));
    assert_fails!(assert_starts_with("Ünïcode", "üNÏ", true));

    assert_passes!(assert_ends_with("report.PDF", ".pdf", false));
    assert_fails!(assert_ends_with("report.PDF", ".pdf", true));

    assert_passes!(assert_in("red", "RED,green,blue", false));
    assert_fails!(assert_in("red", "RED,green,blue", true));
}

#[test]
fn test_length_counts_characters() {
    // 5 chars, 10 bytes
    let greeting = "Ωμέγα";
    assert_eq!(greeting.len(), 10);
    assert_passes!(assert_has_length(greeting, 5));
    assert_passes!(string::assert_is_between(greeting, 5, 5, true));
    assert_fails!(string::assert_is_between(greeting, 5, 10, false));
    assert_passes!(string::assert_is_between(greeting, 4, 6, false));
}

#[test]
fn test_between_with_inverted_bounds_is_a_caller_error() {
    assert_fails_with!(string::assert_is_between("abc", 10, 2, false), ErrorKind::InvalidArgument);
}

#[test]
fn test_password_strength_counters() {
    let password = "Tr0ub4dor & 3";
    assert_passes!(assert_has_uppercase(password, Some(1)));
    assert_passes!(assert_has_lowercase(password, Some(5)));
    assert_passes!(assert_has_numeric(password, Some(3)));
    assert_passes!(assert_has_special_characters(password, Some(1)));
    // whitespace is not special
    assert_fails!(assert_has_special_characters("a b c", None));
    assert_fails!(assert_has_numeric(password, Some(4)));
}

#[test]
fn test_zero_threshold_means_one() {
    assert_fails!(assert_has_uppercase("lower", Some(0)));
    assert_passes!(assert_has_uppercase("Lower", Some(0)));
}

#[test]
fn test_lexical_rules() {
    assert_passes!(assert_is_slug("rust-2024-edition"));
    for bad in ["rust--lang", "-rust", "rust-", "Rust", "rust lang", ""] {
        assert_fails!(assert_is_slug(bad));
    }

    assert_passes!(assert_is_version("1.2.3"));
    assert_passes!(assert_is_version("10.0-rc1"));
    assert_fails!(assert_is_version("1.2.3.4"));

    assert_passes!(assert_is_email("first.last+tag@mail.example.co.uk"));
    assert_passes!(assert_is_email("UPPER@EXAMPLE.COM"));
    assert_fails!(assert_is_email("@example.com"));
    assert_fails!(assert_is_email("user@localhost"));

    assert_passes!(assert_is_uuid("6BA7B810-9DAD-11D1-80B4-00C04FD430C8", true));
    assert_passes!(assert_is_uuid("[6ba7b810-9dad11d1-80b400c04fd430c8]", false));
    assert_fails!(assert_is_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c", false));
}

#[test]
fn test_url_rules() {
    assert_passes!(assert_is_url("http://example.com/"));
    assert_passes!(assert_is_url("https://example.com/a/b?c=d#e"));
    assert_passes!(assert_is_url("//example.com/script.js"));
    assert_passes!(assert_is_url("ftp://files.example.com/pub/"));
    assert_fails!(assert_is_url("http://example.com"));
    assert_fails!(assert_is_url("www.example.com/index.html"));
    assert_fails!(assert_is_url("not a url"));
}

#[test]
fn test_character_classes() {
    assert_passes!(assert_is_alphanumeric("abc123XYZ"));
    assert_fails!(assert_is_alphanumeric("abc 123"));
    assert_passes!(assert_is_alpha("Alpha"));
    assert_fails!(assert_is_alpha("Alpha1"));
    assert_passes!(assert_is_all_consonants("bcd fgh"));
    assert_fails!(assert_is_all_consonants("bcda"));
    assert_passes!(assert_is_vowel("aei ou"));
    assert_passes!(assert_is_digit("0123456789"));
    assert_fails!(assert_is_digit("12.5"));
    assert_passes!(assert_is_hex_digit("DEADbeef42"));
    assert_fails!(assert_is_hex_digit("0xFF"));
    assert_passes!(assert_is_punctuation("!?.,;:"));
    assert_passes!(assert_is_space(" \t\n"));
    assert_passes!(assert_is_control_characters("\n\r\t"));
    assert_passes!(assert_has_graphical_chars_only("a-b_c!"));
    assert_fails!(assert_has_graphical_chars_only("a b"));
    assert_passes!(assert_has_printable_chars_only("a b"));
    assert_fails!(assert_has_printable_chars_only("a\tb"));
    assert_passes!(assert_is_lowercase("straße"));
    assert_passes!(assert_is_uppercase("ÉCOLE"));
    assert_fails!(assert_is_uppercase("École"));
}

#[test]
fn test_empty_string_fails_class_rules() {
    for rule in [
        assert_is_digit,
        assert_is_hex_digit,
        assert_is_punctuation,
        assert_is_space,
        assert_is_control_characters,
        assert_has_graphical_chars_only,
        assert_has_printable_chars_only,
    ] {
        assert_fails_with!(rule(""), ErrorKind::Failed);
    }
}

#[test]
fn test_emptiness_and_whitespace() {
    assert_fails!(assert_not_empty("   "));
    assert_passes!(assert_not_empty("0"));
    assert_passes!(assert_no_whitespace("no_spaces_here"));
    assert_fails!(assert_no_whitespace("one space"));
}

#[test]
fn test_equals_loose_and_identical() {
    assert_passes!(assert_equals("1.50", "1.5", false));
    assert_fails!(assert_equals("1.50", "1.5", true));
    assert_fails!(assert_equals("abc", "ABC", false));
    assert_eq!(
        assert_equals("a", "b", true).unwrap_err().to_string(),
        "Value and b must match."
    );
}

#[test]
fn test_charset_detection_order() {
    let latin1 = b"na\xEFve";
    assert_fails!(assert_is_charset(latin1, &["UTF-8"]));
    assert_passes!(assert_is_charset(latin1, &["UTF-8", "windows-1252"]));
    assert_fails!(assert_is_charset(latin1, &["no-such-charset"]));

    let rule = predicate::is_charset(["US-ASCII", "UTF-8"]);
    assert_eq!(rule.detect("naïve".as_bytes()), Some("UTF-8"));
    assert_eq!(rule.detect(b"naive"), Some("US-ASCII"));
}

#[test]
fn test_regex_rule() {
    assert_passes!(assert_matches_regex("2024-03-15", r"^\d{4}-\d{2}-\d{2}$"));
    assert_fails_with!(assert_matches_regex("x", r"^\d+$"), ErrorKind::Failed);
    assert_fails_with!(assert_matches_regex("x", "[z-a]"), ErrorKind::InvalidArgument);
}

#[test]
fn test_message_override_keeps_rule() {
    let err = assert_is_version("one")
        .with_message("versions look like 1.2.3")
        .unwrap_err();
    assert_eq!(err.to_string(), "versions look like 1.2.3");
    assert_eq!(err.rule(), Some("is_version"));
    assert_eq!(err.value(), Some("one"));
}

#[test]
fn test_predicates_compose_with_combinators() {
    let handle = predicate::is_slug()
        .and(predicate::len_between(3, 15, true))
        .and(predicate::starts_with("@", true).not());
    assert!(handle.check("ferris"));
    assert!(!handle.check("fe"));
    assert!(!handle.check("Ferris"));

    let result = predicate::validate("fe", handle, "handle", "bad handle");
    assert_fails_with!(result, ErrorKind::Failed);
}
