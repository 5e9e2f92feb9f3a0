// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Recursively copies all contents from src directory over dst directory.
///
/// Creates dst if it doesn't exist. Files already present in dst are
/// overwritten; files that only exist in dst are left alone. Returns the
/// number of files copied.
///
/// # Example
/// ```no_run
/// use obs_translation_updater::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new("/tmp/staging/UI"), Path::new("UI")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading, copying).
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let mut entries = fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    let mut copied = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", src.display()))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type().await?.is_dir() {
            copied += Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Moves a directory to a new location, creating the destination's parents.
///
/// Falls back to copy-and-delete when a plain rename is refused
/// (for example across filesystems).
///
/// # Errors
///
/// Returns an error if the destination already exists or any IO operation fails.
pub async fn move_dir_async(src: &Path, dst: &Path) -> Result<()> {
    if fs::try_exists(dst).await.unwrap_or(false) {
        anyhow::bail!("cannot move {} onto existing {}", src.display(), dst.display());
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    if fs::rename(src, dst).await.is_ok() {
        return Ok(());
    }

    copy_dir_contents_async(src, dst).await?;
    fs::remove_dir_all(src)
        .await
        .with_context(|| format!("failed to remove {}", src.display()))?;
    Ok(())
}
