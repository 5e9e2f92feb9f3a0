// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Removes a file or directory tree. Returns `false` if nothing was there.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub async fn remove_path_if_exists(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to stat {}", path.display()));
        }
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };
    removed.with_context(|| format!("failed to remove {}", path.display()))?;
    Ok(true)
}

/// Deletes every entry of `dir` except the file named `keep`.
///
/// Entries are removed inside `dir` itself. Returns the number of removed entries.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or an entry cannot be removed.
pub async fn clear_dir_except(dir: &Path, keep: &str) -> Result<usize> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut removed = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", dir.display()))?
    {
        if entry.file_name() == keep {
            continue;
        }
        if remove_path_if_exists(&entry.path()).await? {
            removed += 1;
        }
    }
    Ok(removed)
}
