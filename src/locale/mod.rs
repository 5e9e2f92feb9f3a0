// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation files: archive extraction, normalization and placement.
//!
//! ```text
//! zip bytes --> archive::extract_to_staging() --> StagingArea (temp dir)
//!                      | normalize::Normalizer
//!                      v
//!               layout::arrange_staging()   Website removed, submodules under plugins/
//!               layout::apply_staging()     UI/ and plugins/ copied over the tree
//! ```

pub mod archive;
pub mod layout;
pub mod normalize;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::error::{FsError, SyncResult};
use tempfile::TempDir;

/// Temporary directory receiving the normalized archive.
///
/// Removed by [`StagingArea::close`] or when dropped.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// # Errors
    ///
    /// Returns `FsError::IoError` if the temporary directory cannot be created.
    pub fn new() -> SyncResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix("obs-translation-updater-")
            .tempdir()
            .map_err(|source| FsError::IoError {
                path: std::env::temp_dir().display().to_string(),
                source,
            })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Per-language desktop entry strings.
    #[must_use]
    pub fn desktop_entry_dir(&self) -> PathBuf {
        self.path().join(layout::DESKTOP_ENTRY_DIR)
    }

    /// Delete the staging directory.
    ///
    /// # Errors
    ///
    /// Returns `FsError::IoError` if removal fails.
    pub fn close(self) -> SyncResult<()> {
        let path = self.path().display().to_string();
        self.dir
            .close()
            .map_err(|source| FsError::IoError { path, source }.into())
    }
}
