//! Failure events emitted by the assertion facade
#![cfg(feature = "tracing")]

use std::collections::HashMap;

use touchstone::assert::*;
use touchstone::upload::{ServerLimits, UploadSlot, UploadedFile};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_failed_assertion_is_logged() {
    assert!(assert_is_slug("Not A Slug").is_err());
    assert!(logs_contain("assertion failed: Value does not match a valid slug expression."));
    assert!(logs_contain("is_slug"));
}

#[test]
#[traced_test]
fn test_passing_assertion_is_silent() {
    assert!(assert_is_slug("a-slug").is_ok());
    assert!(!logs_contain("assertion failed"));
}

#[test]
#[traced_test]
fn test_server_limit_is_a_warning() {
    let files: HashMap<String, UploadSlot> = [(
        "avatar".to_string(),
        UploadSlot::single(UploadedFile::new("me.png", "/tmp/me.png", 3_000_000)),
    )]
    .into_iter()
    .collect();
    let limits = ServerLimits::parse("8M", "2M").unwrap();

    let err = assert_is_between_file_size(&files, &limits, "avatar", 1, 5, "MB", true);
    assert!(err.is_err());
    assert!(logs_contain("upload rejected by server size limit"));
    assert!(logs_contain("limit=2000000"));
}

#[test]
#[traced_test]
fn test_invalid_date_is_logged() {
    assert!(assert_is_weekend("someday").is_err());
    assert!(logs_contain("InvalidDate"));
}

#[test]
#[traced_test]
fn test_invalid_argument_is_logged() {
    assert!(assert_matches_regex("x", "(").is_err());
    assert!(logs_contain("kind=InvalidArgument"));

    assert!(string::assert_is_between("abc", 5, 1, true).is_err());
    assert!(logs_contain("5 cannot be larger than 1 for validation"));
}

#[test]
#[traced_test]
fn test_invalid_date_bound_is_logged_once() {
    assert!(assert_is_before("2024-01-01", "whenever", true).is_err());
    assert!(logs_contain("whenever"));
    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|line| line.contains("assertion failed")).count() {
            1 => Ok(()),
            n => Err(format!("expected one event, got {n}")),
        }
    });
}
