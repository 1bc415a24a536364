//! Integration tests for the upload assertions
//!
//! Files are written to temporary directories so the filesystem and MIME
//! rules run against real content.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use touchstone::assert::{self, *};
use touchstone::predicate::{ends_with, is_slug, Predicate, PredicateExt};
use touchstone::upload::{
    max_server_file_size, MagicSniffer, ServerLimitProvider, ServerLimits, SizeLimit, UploadSlot,
    UploadedFile,
};
use touchstone::{assert_fails, assert_fails_with, assert_passes, AssertionError, ErrorKind};

const PNG: &[u8] = b"\x89PNG\r\n\x1A\n\x00\x00\x00\rIHDR";
const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00";
const TEXT: &[u8] = b"just some words";

fn write(dir: &Path, name: &str, content: &[u8]) -> UploadedFile {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    UploadedFile::new(name, path, content.len() as u64)
}

fn request(slots: Vec<(&str, UploadSlot)>) -> HashMap<String, UploadSlot> {
    slots
        .into_iter()
        .map(|(name, slot)| (name.to_string(), slot))
        .collect()
}

fn sized(size: u64) -> HashMap<String, UploadSlot> {
    request(vec![(
        "file",
        UploadSlot::single(UploadedFile::new("f.bin", "/nonexistent/f.bin", size)),
    )])
}

#[test]
fn test_server_ceiling_scenario() {
    let limits = ServerLimits::parse("8M", "2M").unwrap();
    assert_eq!(max_server_file_size(&limits), Some(2_000_000));

    assert_fails_with!(
        assert_is_between_file_size(&sized(3_000_000), &limits, "file", 1, 5, "MB", true),
        ErrorKind::UploadLimitExceeded
    );
    assert_fails_with!(
        assert_is_between_file_size(&sized(500_000), &limits, "file", 1, 5, "MB", true),
        ErrorKind::Failed
    );
    assert_passes!(assert_is_between_file_size(
        &sized(1_500_000),
        &limits,
        "file",
        1,
        5,
        "MB",
        true
    ));
}

#[test]
fn test_exceeded_error_names_slot_and_limit() {
    let limits = ServerLimits::parse("1M", "4M").unwrap();
    let err =
        assert_is_between_file_size(&sized(1_000_001), &limits, "file", 0, 10, "M", true)
            .unwrap_err();
    assert_eq!(
        err,
        AssertionError::UploadLimitExceeded {
            upload: "file".to_string(),
            size: 1_000_001,
            limit: 1_000_000,
        }
    );
    assert_eq!(
        err.to_string(),
        "upload 'file' is 1000001 bytes, exceeding the server limit of 1000000 bytes"
    );
}

#[test]
fn test_custom_limit_provider() {
    struct Unlimited;

    impl ServerLimitProvider for Unlimited {
        fn post_max_size(&self) -> SizeLimit {
            SizeLimit::unlimited()
        }

        fn upload_max_filesize(&self) -> SizeLimit {
            SizeLimit::unlimited()
        }
    }

    assert_passes!(assert_is_between_file_size(
        &sized(3_000_000_000),
        &Unlimited,
        "file",
        1,
        5,
        "GB",
        false
    ));
}

#[test]
fn test_sniffed_types() {
    let dir = tempfile::tempdir().unwrap();
    let files = request(vec![
        ("avatar", UploadSlot::single(write(dir.path(), "me.png", PNG))),
        (
            "gallery",
            UploadSlot::multiple(vec![
                write(dir.path(), "a.png", PNG),
                write(dir.path(), "b.gif", GIF),
            ]),
        ),
        (
            "mixed",
            UploadSlot::multiple(vec![
                write(dir.path(), "c.png", PNG),
                write(dir.path(), "notes.png", TEXT),
            ]),
        ),
    ]);

    assert_passes!(assert_is_image(&files, &MagicSniffer, "avatar"));
    assert_passes!(assert_is_image(&files, &MagicSniffer, "gallery"));
    assert_fails!(assert_is_image(&files, &MagicSniffer, "mixed"));
    assert_fails!(assert_is_image(&files, &MagicSniffer, "missing"));

    assert_passes!(assert_is_mime_type(&files, &MagicSniffer, "avatar", &["image/png"]));
    assert_fails!(assert_is_mime_type(&files, &MagicSniffer, "gallery", &["image/png"]));
}

#[test]
fn test_file_name_validators() {
    let files = request(vec![(
        "docs",
        UploadSlot::multiple(vec![
            UploadedFile::new("terms.pdf", "/tmp/1", 1),
            UploadedFile::new("privacy.PDF", "/tmp/2", 1),
        ]),
    )]);

    assert_passes!(assert_has_file_name_format(&files, "docs", &ends_with(".pdf", false)));
    assert_fails!(assert_has_file_name_format(&files, "docs", &ends_with(".pdf", true)));

    let stem_is_slug = |name: &str| {
        name.rsplit_once('.')
            .is_some_and(|(stem, _)| is_slug().and(ends_with("s", true).not()).check(stem))
    };
    assert_fails!(assert_has_file_name_format(&files, "docs", &stem_is_slug));
}

#[test]
fn test_upload_directory_and_overwrites() {
    let uploads = tempfile::tempdir().unwrap();
    let staging = tempfile::tempdir().unwrap();
    let files = request(vec![(
        "report",
        UploadSlot::single(write(staging.path(), "q1.csv", b"a,b\n1,2\n")),
    )]);

    assert_passes!(assert_has_valid_upload_directory(&files, "report", uploads.path()));
    assert_fails!(assert_has_valid_upload_directory(&files, "other", uploads.path()));
    assert_fails!(assert_has_valid_upload_directory(
        &files,
        "report",
        uploads.path().join("missing")
    ));

    assert_passes!(assert_not_overwriting_existing_file(&files, "report", uploads.path()));
    fs::write(uploads.path().join("q1.csv"), b"old").unwrap();
    assert_fails!(assert_not_overwriting_existing_file(&files, "report", uploads.path()));
}

#[test]
fn test_slot_cardinality() {
    let files = request(vec![
        ("one", UploadSlot::single(UploadedFile::new("a", "/tmp/a", 1))),
        (
            "three",
            UploadSlot::multiple((0..3).map(|i| UploadedFile::new(format!("{i}"), "/tmp/x", 1))),
        ),
    ]);

    assert_passes!(assert::upload::assert_has_length(&files, "one", 1));
    assert_fails!(assert::upload::assert_has_length(&files, "one", 0));
    assert_passes!(assert::upload::assert_has_length(&files, "three", 3));
    assert_fails!(assert::upload::assert_has_length(&files, "three", 1));
    assert_fails!(assert::upload::assert_has_length(&files, "none", 0));

    assert_passes!(assert_is_uploaded(&files, "three"));
    assert_fails!(assert_is_uploaded(&files, "none"));
}
