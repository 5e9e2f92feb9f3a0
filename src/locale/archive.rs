// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation archive reading and staging.
//!
//! ```text
//! zip bytes --> read_entries() --> [Directory(path) | File { path, text }]
//!                                        |
//!                        stage_entries() v
//!   Directory --> mkdir -p staging/path
//!   File      --> normalize --> Some(text) --> staging/path
//!                           --> None       --> skipped
//! ```

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tracing::{debug, trace};
use zip::ZipArchive;

use super::normalize::Normalizer;
use crate::error::{ArchiveError, Result, SyncResult};
use crate::utility::encoding::{TextEncoding, decode_text, detect};

/// One entry of the translations archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveEntry {
    Directory(PathBuf),
    File { path: PathBuf, text: String },
}

/// Counters reported after staging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageSummary {
    pub directories: usize,
    pub files: usize,
    pub discarded: usize,
}

/// Decode every entry of a zip archive held in memory.
///
/// Paths are relative and never escape the extraction root.
///
/// # Errors
///
/// Returns `ArchiveError::Zip` for a corrupt archive, `UnsafePath` for an
/// absolute or `..` entry name, and `Read` if an entry cannot be inflated.
pub fn read_entries(bytes: &[u8]) -> SyncResult<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(ArchiveError::Zip)?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(ArchiveError::Zip)?;
        let name = file.name().to_string();
        let path = file
            .enclosed_name()
            .ok_or_else(|| ArchiveError::UnsafePath(name.clone()))?;

        if file.is_dir() {
            entries.push(ArchiveEntry::Directory(path));
            continue;
        }

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|source| ArchiveError::Read {
                path: name.clone(),
                source,
            })?;
        let encoding = detect(&raw);
        if encoding != TextEncoding::Utf8 {
            trace!(entry = %name, ?encoding, "decoding entry with byte order mark");
        }
        entries.push(ArchiveEntry::File {
            path,
            text: decode_text(&raw).into_owned(),
        });
    }

    Ok(entries)
}

/// Write archive entries below `root`, normalizing file text.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub async fn stage_entries(
    entries: Vec<ArchiveEntry>,
    root: &Path,
    normalizer: &Normalizer,
) -> Result<StageSummary> {
    let mut summary = StageSummary::default();

    for entry in entries {
        match entry {
            ArchiveEntry::Directory(path) => {
                let dir = root.join(&path);
                fs::create_dir_all(&dir)
                    .await
                    .with_context(|| format!("failed to create {}", dir.display()))?;
                summary.directories += 1;
            }
            ArchiveEntry::File { path, text } => {
                let Some(text) = normalizer.normalize(&text) else {
                    trace!(entry = %path.display(), "discarding empty translation");
                    summary.discarded += 1;
                    continue;
                };
                let target = root.join(&path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                fs::write(&target, text)
                    .await
                    .with_context(|| format!("failed to write {}", target.display()))?;
                summary.files += 1;
            }
        }
    }

    debug!(
        directories = summary.directories,
        files = summary.files,
        discarded = summary.discarded,
        "staged translations archive"
    );
    Ok(summary)
}

/// Read a zip archive and stage its entries below `root`.
///
/// # Errors
///
/// Returns an error if the archive is invalid or staging fails.
pub async fn extract_to_staging(
    bytes: &[u8],
    root: &Path,
    normalizer: &Normalizer,
) -> Result<StageSummary> {
    let entries = read_entries(bytes).context("failed to read translations archive")?;
    stage_entries(entries, root, normalizer).await
}
