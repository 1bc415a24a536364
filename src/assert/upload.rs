//! Upload assertions
//!
//! The offending value recorded on failure is the upload slot name.

use std::path::Path;

use super::{ensure, traced};
use crate::error::AssertResult;
use crate::upload::{self, FilenameValidator, MimeSniffer, ServerLimitProvider, UploadSource};

/// Default message of [`assert_is_uploaded`].
pub const IS_UPLOADED: &str = "File was not uploaded.";
/// Default message of [`assert_is_mime_type`].
pub const IS_MIME_TYPE: &str = "File type is not allowed.";
/// Default message of [`assert_has_file_name_format`].
pub const HAS_FILE_NAME_FORMAT: &str = "File name format is not valid.";
/// Default message of [`assert_has_valid_upload_directory`].
pub const HAS_VALID_UPLOAD_DIRECTORY: &str = "Upload directory is not valid or not writable.";
/// Default message of [`assert_not_overwriting_existing_file`].
pub const NOT_OVERWRITING_EXISTING_FILE: &str = "File already exists in the upload directory.";
/// Default message of [`assert_is_image`].
pub const IS_IMAGE: &str = "File is not an image.";

/// A slot named `name` was submitted.
pub fn assert_is_uploaded<S: UploadSource + ?Sized>(source: &S, name: &str) -> AssertResult {
    ensure(upload::is_uploaded(source, name), "is_uploaded", IS_UPLOADED, name)
}

/// Every record's size is within `[min, max]` `unit`s.
///
/// # Errors
///
/// [`AssertionError::UploadLimitExceeded`](crate::AssertionError::UploadLimitExceeded)
/// when the server ceiling rejects a record, `InvalidArgument` when
/// `min > max`, `Failed` otherwise.
///
/// ```rust
/// use std::collections::HashMap;
/// use touchstone::assert::assert_is_between_file_size;
/// use touchstone::upload::{ServerLimits, UploadSlot, UploadedFile};
/// use touchstone::ErrorKind;
///
/// let limits = ServerLimits::parse("8M", "2M").unwrap();
/// let mut files = HashMap::new();
/// files.insert(
///     "scan".to_string(),
///     UploadSlot::single(UploadedFile::new("scan.png", "/tmp/a", 3_000_000)),
/// );
///
/// let err = assert_is_between_file_size(&files, &limits, "scan", 1, 5, "MB", true).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UploadLimitExceeded);
/// ```
pub fn assert_is_between_file_size<S, L>(
    source: &S,
    limits: &L,
    name: &str,
    min: u64,
    max: u64,
    unit: &str,
    inclusive: bool,
) -> AssertResult
where
    S: UploadSource + ?Sized,
    L: ServerLimitProvider + ?Sized,
{
    match upload::is_between_file_size(source, limits, name, min, max, unit, inclusive) {
        Ok(passed) => ensure(
            passed,
            "is_between_file_size",
            format!("File size must be between {min} and {max} {unit}."),
            name,
        ),
        Err(err) => traced(Err(err)),
    }
}

/// Every record's sniffed MIME type is in `allowed`.
pub fn assert_is_mime_type<S, M>(
    source: &S,
    sniffer: &M,
    name: &str,
    allowed: &[&str],
) -> AssertResult
where
    S: UploadSource + ?Sized,
    M: MimeSniffer + ?Sized,
{
    ensure(
        upload::is_mime_type(source, sniffer, name, allowed),
        "is_mime_type",
        IS_MIME_TYPE,
        name,
    )
}

/// `validator` accepts every record's file name.
pub fn assert_has_file_name_format<S, V>(source: &S, name: &str, validator: &V) -> AssertResult
where
    S: UploadSource + ?Sized,
    V: FilenameValidator + ?Sized,
{
    ensure(
        upload::has_file_name_format(source, name, validator),
        "has_file_name_format",
        HAS_FILE_NAME_FORMAT,
        name,
    )
}

/// The slot exists and `dir` is a writable directory.
pub fn assert_has_valid_upload_directory<S: UploadSource + ?Sized>(
    source: &S,
    name: &str,
    dir: impl AsRef<Path>,
) -> AssertResult {
    ensure(
        upload::has_valid_upload_directory(source, name, dir),
        "has_valid_upload_directory",
        HAS_VALID_UPLOAD_DIRECTORY,
        name,
    )
}

/// No record would overwrite a file already in `dir`.
pub fn assert_not_overwriting_existing_file<S: UploadSource + ?Sized>(
    source: &S,
    name: &str,
    dir: impl AsRef<Path>,
) -> AssertResult {
    ensure(
        upload::not_overwriting_existing_file(source, name, dir),
        "not_overwriting_existing_file",
        NOT_OVERWRITING_EXISTING_FILE,
        name,
    )
}

/// The slot holds exactly `count` records.
pub fn assert_has_length<S: UploadSource + ?Sized>(
    source: &S,
    name: &str,
    count: usize,
) -> AssertResult {
    ensure(
        upload::has_length(source, name, count),
        "has_length",
        format!("Expected {count} uploaded files."),
        name,
    )
}

/// Every record is a GIF, JPEG or PNG image.
pub fn assert_is_image<S, M>(source: &S, sniffer: &M, name: &str) -> AssertResult
where
    S: UploadSource + ?Sized,
    M: MimeSniffer + ?Sized,
{
    ensure(
        upload::is_image(source, sniffer, name),
        "is_image",
        IS_IMAGE,
        name,
    )
}
