//! Checking a multipart upload against server limits and sniffed content
//!
//! Run with: cargo run --example upload_checks --features tracing

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use touchstone::assert::{self, *};
use touchstone::predicate::{ends_with, PredicateExt};
use touchstone::prelude::*;

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1A\n\x00\x00\x00\rIHDR";

fn stage(dir: &Path, name: &str, content: &[u8]) -> io::Result<UploadedFile> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(UploadedFile::new(name, path, content.len() as u64))
}

fn check_request(
    files: &HashMap<String, UploadSlot>,
    limits: &ServerLimits,
    target: &Path,
) -> Validation<()> {
    let pdf_name = ends_with(".pdf", false).and(|name: &str| !name.starts_with('.'));

    Validation::success(())
        .check(assert_is_uploaded(files, "avatar"))
        .check(assert_is_image(files, &MagicSniffer, "avatar"))
        .check(assert_is_between_file_size(files, limits, "avatar", 1, 1, "MB", true))
        .check(assert_has_file_name_format(files, "contracts", &pdf_name))
        .check(assert::upload::assert_has_length(files, "contracts", 2))
        .check(assert_has_valid_upload_directory(files, "contracts", target))
        .check(assert_not_overwriting_existing_file(files, "contracts", target))
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let staging = tempfile::tempdir()?;
    let target = tempfile::tempdir()?;
    fs::write(target.path().join("lease.pdf"), b"%PDF-1.4 old copy")?;

    let mut avatar = PNG_HEADER.to_vec();
    avatar.resize(1_500_000, 0);

    let files: HashMap<String, UploadSlot> = [
        (
            "avatar".to_string(),
            UploadSlot::single(stage(staging.path(), "me.png", &avatar)?),
        ),
        (
            "contracts".to_string(),
            UploadSlot::multiple([
                stage(staging.path(), "lease.pdf", b"%PDF-1.4 new copy")?,
                stage(staging.path(), "notes.txt", b"plain text")?,
            ]),
        ),
    ]
    .into_iter()
    .collect();

    for (post, file) in [("8M", "2M"), ("8M", "1M"), ("0", "0")] {
        let limits = match ServerLimits::parse(post, file) {
            Ok(limits) => limits,
            Err(e) => {
                tracing::error!("bad limits: {}", e);
                continue;
            }
        };
        tracing::info!(post_max_size = post, upload_max_filesize = file, "checking request");

        match check_request(&files, &limits, target.path()) {
            Validation::Success(()) => tracing::info!("request accepted"),
            Validation::Failure(failures) => {
                for failure in failures.iter() {
                    tracing::info!(kind = ?failure.kind(), "{}", failure);
                }
            }
        }
    }

    Ok(())
}
