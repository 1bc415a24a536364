//! File upload rules
//!
//! Uploads are read through an [`UploadSource`]: a read-only view of the
//! request's file table, keyed by field name. A slot holds either one
//! [`UploadedFile`] or several (a multi-file input), and every rule behaves the
//! same for both shapes: a multi-file slot passes only when every record passes.
//!
//! The transport, the server's size configuration and MIME detection are
//! outside this crate and are injected as [`UploadSource`],
//! [`ServerLimitProvider`] and [`MimeSniffer`].
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use touchstone::upload::{self, ServerLimits, UploadSlot, UploadedFile};
//!
//! let mut files = HashMap::new();
//! files.insert(
//!     "avatar".to_string(),
//!     UploadSlot::single(UploadedFile::new("me.png", "/tmp/php1234", 1_500_000)),
//! );
//!
//! let limits = ServerLimits::parse("8M", "2M").unwrap();
//! assert!(upload::is_uploaded(&files, "avatar"));
//! assert!(upload::is_between_file_size(&files, &limits, "avatar", 1, 5, "MB", true).unwrap());
//! ```

mod limits;
mod rules;
mod sniff;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::Deserialize;

pub use limits::{
    byte_multiplier, max_server_file_size, ServerLimitProvider, ServerLimits, SizeLimit,
    BYTE_UNITS,
};
pub use rules::{
    has_file_name_format, has_length, has_valid_upload_directory, is_between_file_size,
    is_image, is_mime_type, is_uploaded, not_overwriting_existing_file, FilenameValidator,
    IMAGE_MIME_TYPES,
};
pub use sniff::{MagicSniffer, MimeSniffer};

/// One uploaded file as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct UploadedFile {
    /// Client-supplied file name.
    pub name: String,
    /// Where the transport stored the content.
    pub tmp_path: PathBuf,
    /// Declared size in bytes.
    pub size: u64,
}

impl UploadedFile {
    /// Describe an uploaded file.
    pub fn new(name: impl Into<String>, tmp_path: impl Into<PathBuf>, size: u64) -> Self {
        UploadedFile {
            name: name.into(),
            tmp_path: tmp_path.into(),
            size,
        }
    }

    /// Where the content is stored.
    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }
}

/// One named upload field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(untagged))]
pub enum UploadSlot {
    /// A plain file input.
    Single(UploadedFile),
    /// A multi-file input, in submission order.
    Multiple(Vec<UploadedFile>),
}

impl UploadSlot {
    /// A slot holding one file.
    pub fn single(file: UploadedFile) -> Self {
        UploadSlot::Single(file)
    }

    /// A slot holding several files.
    pub fn multiple(files: impl IntoIterator<Item = UploadedFile>) -> Self {
        UploadSlot::Multiple(files.into_iter().collect())
    }

    /// The records in this slot, whatever its shape.
    pub fn files(&self) -> &[UploadedFile] {
        match self {
            UploadSlot::Single(file) => std::slice::from_ref(file),
            UploadSlot::Multiple(files) => files,
        }
    }

    /// `true` for [`UploadSlot::Multiple`], even when it holds a single record.
    pub fn is_multiple(&self) -> bool {
        matches!(self, UploadSlot::Multiple(_))
    }
}

/// Read-only view of the current request's uploads.
pub trait UploadSource: Send + Sync {
    /// The slot for a field name, if the field was submitted.
    fn slot(&self, name: &str) -> Option<&UploadSlot>;
}

impl UploadSource for HashMap<String, UploadSlot> {
    fn slot(&self, name: &str) -> Option<&UploadSlot> {
        self.get(name)
    }
}

impl UploadSource for BTreeMap<String, UploadSlot> {
    fn slot(&self, name: &str) -> Option<&UploadSlot> {
        self.get(name)
    }
}

impl<S: UploadSource + ?Sized> UploadSource for &S {
    fn slot(&self, name: &str) -> Option<&UploadSlot> {
        (**self).slot(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_flattens_both_shapes() {
        let one = UploadSlot::single(UploadedFile::new("a.txt", "/tmp/a", 1));
        assert_eq!(one.files().len(), 1);
        assert!(!one.is_multiple());

        let many = UploadSlot::multiple(vec![
            UploadedFile::new("a.txt", "/tmp/a", 1),
            UploadedFile::new("b.txt", "/tmp/b", 2),
        ]);
        assert_eq!(many.files().iter().map(|f| f.size).sum::<u64>(), 3);
        assert!(many.is_multiple());
    }

    #[test]
    fn test_map_sources() {
        let mut hash = HashMap::new();
        hash.insert("doc".to_string(), UploadSlot::single(UploadedFile::new("d", "/t", 0)));
        assert!(hash.slot("doc").is_some());
        assert!(hash.slot("other").is_none());

        let tree: BTreeMap<String, UploadSlot> = hash.clone().into_iter().collect();
        assert_eq!(tree.slot("doc"), hash.slot("doc"));
    }
}
