//! Upload predicates
//!
//! Each rule looks its slot up in an [`UploadSource`] and is the logical AND
//! over every record in the slot. A missing slot fails every rule except
//! where noted.

use std::path::Path;

use super::limits::{byte_multiplier, max_server_file_size, ServerLimitProvider};
use super::sniff::MimeSniffer;
use super::{UploadSlot, UploadSource, UploadedFile};
use crate::error::AssertionError;
use crate::predicate::Predicate;

/// Types accepted by [`is_image`].
pub const IMAGE_MIME_TYPES: [&str; 3] = ["image/gif", "image/jpeg", "image/png"];

/// Decides whether a client-supplied file name is acceptable.
///
/// Implemented for every [`Predicate<str>`], so the string rules and their
/// combinators can be used directly.
pub trait FilenameValidator {
    /// `true` when `name` is acceptable.
    fn validate(&self, name: &str) -> bool;
}

impl<P: Predicate<str> + ?Sized> FilenameValidator for P {
    fn validate(&self, name: &str) -> bool {
        self.check(name)
    }
}

fn records<'a, S: UploadSource + ?Sized>(source: &'a S, name: &str) -> Option<&'a [UploadedFile]> {
    source.slot(name).map(UploadSlot::files)
}

/// `true` when a slot named `name` was submitted.
pub fn is_uploaded<S: UploadSource + ?Sized>(source: &S, name: &str) -> bool {
    source.slot(name).is_some()
}

/// Check every record's size against `[min, max]` expressed in `unit`.
///
/// The bounds are multiplied by the unit's byte multiplier (`B` or an unknown
/// unit counts as bytes). When the server ceiling is at or below the caller's
/// `max`, a record the ceiling rejects fails the call with
/// [`AssertionError::UploadLimitExceeded`] rather than returning `false`:
/// anything larger than the ceiling, and with exclusive bounds a record of
/// exactly the ceiling when the caller's `max` is larger still.
///
/// # Errors
///
/// `InvalidArgument` when `min > max`; `UploadLimitExceeded` as above.
pub fn is_between_file_size<S, L>(
    source: &S,
    limits: &L,
    name: &str,
    min: u64,
    max: u64,
    unit: &str,
    inclusive: bool,
) -> Result<bool, AssertionError>
where
    S: UploadSource + ?Sized,
    L: ServerLimitProvider + ?Sized,
{
    if min > max {
        return Err(AssertionError::invalid_argument(format!(
            "{min} cannot be larger than {max} for validation"
        )));
    }

    let multiplier = byte_multiplier(unit).unwrap_or(1);
    let min_bytes = min.saturating_mul(multiplier);
    let max_bytes = max.saturating_mul(multiplier);
    let ceiling = max_server_file_size(limits);

    let Some(files) = records(source, name) else {
        return Ok(false);
    };

    let mut valid = true;
    for file in files {
        if let Some(limit) = ceiling {
            // below the caller's max, an exclusive range also stops short of the ceiling
            let over =
                file.size > limit || (!inclusive && limit < max_bytes && file.size == limit);
            if limit <= max_bytes && over {
                return Err(AssertionError::UploadLimitExceeded {
                    upload: name.to_string(),
                    size: file.size,
                    limit,
                });
            }
        }

        valid &= if inclusive {
            min_bytes <= file.size && file.size <= max_bytes
        } else {
            min_bytes < file.size && file.size < max_bytes
        };
    }
    Ok(valid)
}

/// `true` when every record's sniffed type is in `allowed`.
///
/// Matching is exact and case-sensitive. A record whose type cannot be
/// determined fails.
pub fn is_mime_type<S, M>(source: &S, sniffer: &M, name: &str, allowed: &[&str]) -> bool
where
    S: UploadSource + ?Sized,
    M: MimeSniffer + ?Sized,
{
    records(source, name).is_some_and(|files| {
        files.iter().all(|file| {
            let mime = sniffer.sniff(file.tmp_path());
            allowed.contains(&mime.as_str())
        })
    })
}

/// [`is_mime_type`] restricted to [`IMAGE_MIME_TYPES`].
pub fn is_image<S, M>(source: &S, sniffer: &M, name: &str) -> bool
where
    S: UploadSource + ?Sized,
    M: MimeSniffer + ?Sized,
{
    is_mime_type(source, sniffer, name, &IMAGE_MIME_TYPES)
}

/// `true` when `validator` accepts every record's client file name.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use touchstone::predicate::{ends_with, PredicateExt};
/// use touchstone::upload::{has_file_name_format, UploadSlot, UploadedFile};
///
/// let mut files = HashMap::new();
/// files.insert(
///     "report".to_string(),
///     UploadSlot::single(UploadedFile::new("q3.pdf", "/tmp/x", 10)),
/// );
///
/// let pdf = ends_with(".pdf", false).or(ends_with(".PDF", true));
/// assert!(has_file_name_format(&files, "report", &pdf));
/// ```
pub fn has_file_name_format<S, V>(source: &S, name: &str, validator: &V) -> bool
where
    S: UploadSource + ?Sized,
    V: FilenameValidator + ?Sized,
{
    records(source, name).is_some_and(|files| files.iter().all(|file| validator.validate(&file.name)))
}

/// `true` when the slot exists and `dir` is an existing, writable directory.
///
/// Writability is probed by creating and immediately discarding an anonymous
/// temporary file inside `dir`.
pub fn has_valid_upload_directory<S: UploadSource + ?Sized>(
    source: &S,
    name: &str,
    dir: impl AsRef<Path>,
) -> bool {
    let dir = dir.as_ref();
    is_uploaded(source, name) && dir.is_dir() && tempfile::tempfile_in(dir).is_ok()
}

/// `true` when no record's client file name already exists in `dir`.
pub fn not_overwriting_existing_file<S: UploadSource + ?Sized>(
    source: &S,
    name: &str,
    dir: impl AsRef<Path>,
) -> bool {
    let dir = dir.as_ref();
    records(source, name).is_some_and(|files| files.iter().all(|file| !dir.join(&file.name).exists()))
}

/// `true` when the slot holds exactly `count` records.
///
/// A single-file slot only satisfies `count == 1`.
pub fn has_length<S: UploadSource + ?Sized>(source: &S, name: &str, count: usize) -> bool {
    match source.slot(name) {
        Some(UploadSlot::Multiple(files)) => files.len() == count,
        Some(UploadSlot::Single(_)) => count == 1,
        None => false,
    }
}
