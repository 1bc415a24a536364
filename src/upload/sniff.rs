//! MIME detection from file content

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detects the MIME type of a stored upload from its content.
///
/// Returns an empty string when the type cannot be determined. Declared
/// client-side types are never consulted.
pub trait MimeSniffer: Send + Sync {
    /// MIME type of the file at `path`, or `""`.
    fn sniff(&self, path: &Path) -> String;
}

impl<F> MimeSniffer for F
where
    F: Fn(&Path) -> String + Send + Sync,
{
    fn sniff(&self, path: &Path) -> String {
        self(path)
    }
}

/// Leading-byte signatures and the type they identify.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"\x89PNG\r\n\x1A\n", "image/png"),
    (b"BM", "image/bmp"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1F\x8B", "application/gzip"),
];

const HEADER_LEN: usize = 16;

/// Magic-number sniffer covering common image and archive formats.
///
/// # Example
///
/// ```rust
/// use touchstone::upload::{MagicSniffer, MimeSniffer};
///
/// assert_eq!(MagicSniffer.detect(b"\x89PNG\r\n\x1A\n...."), Some("image/png"));
/// assert_eq!(MagicSniffer.detect(b"plain text"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicSniffer;

impl MagicSniffer {
    /// Match a file header against the known signatures.
    pub fn detect(&self, header: &[u8]) -> Option<&'static str> {
        if header.len() >= 12 && &header[..4] == b"RIFF" && &header[8..12] == b"WEBP" {
            return Some("image/webp");
        }
        SIGNATURES
            .iter()
            .find(|(magic, _)| header.starts_with(magic))
            .map(|&(_, mime)| mime)
    }
}

impl MimeSniffer for MagicSniffer {
    fn sniff(&self, path: &Path) -> String {
        let mut header = Vec::with_capacity(HEADER_LEN);
        let read = File::open(path).and_then(|file| {
            file.take(HEADER_LEN as u64).read_to_end(&mut header)
        });
        match read {
            Ok(_) => self.detect(&header).unwrap_or_default().to_string(),
            Err(_) => String::new(),
        }
    }
}
