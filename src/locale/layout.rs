// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project tree layout: where translations live and how the staged archive
//! maps onto it.
//!
//! ```text
//! project tree                          staging (after arrange_staging)
//! UI/data/locale/*.ini        <-------- UI/...
//! plugins/enc-amf/resources/locale      plugins/enc-amf/...   (moved from enc-amf/)
//! plugins/<name>/data/locale  <-------- plugins/<name>/...
//!                                       Website/  removed
//!                                       desktop-entry/  read by the desktop patcher
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::utility::fs::copy::{copy_dir_contents_async, move_dir_async};
use crate::utility::fs::remove::{clear_dir_except, remove_path_if_exists};

/// Top-level staged directory copied over the UI tree.
pub const UI_DIR: &str = "UI";
/// Staged directory that is never applied.
pub const WEBSITE_DIR: &str = "Website";
/// Staged directory holding per-language desktop entry strings.
pub const DESKTOP_ENTRY_DIR: &str = "desktop-entry";

/// A locale directory to empty before new translations arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDir {
    pub path: PathBuf,
    /// A missing required directory is an error; optional ones are skipped.
    pub required: bool,
}

/// Locale directories of the project, given the names found under the plugins directory.
///
/// Order: UI, the `enc-amf` resources, then `<plugin>/data/locale` for every
/// listed plugin in sorted order. Whether a plugin directory actually holds a
/// locale directory is checked by the caller.
#[must_use]
pub fn translation_dirs(config: &Config, plugin_names: &[String]) -> Vec<TranslationDir> {
    let plugins = config.repo_path(&config.repo.plugins_dir);
    let mut names: Vec<&String> = plugin_names.iter().collect();
    names.sort();

    let mut dirs = vec![
        TranslationDir {
            path: config.repo_path(&config.repo.ui_locale_dir),
            required: true,
        },
        TranslationDir {
            path: plugins.join("enc-amf").join("resources").join("locale"),
            required: false,
        },
    ];
    dirs.extend(names.into_iter().map(|name| TranslationDir {
        path: plugins.join(name).join("data").join("locale"),
        required: false,
    }));
    dirs
}

async fn list_dir_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

async fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_dir())
}

/// Delete every translation except the base locale file, so languages
/// dropped upstream disappear from the tree.
///
/// # Errors
///
/// Returns an error if the UI locale directory is missing or any removal fails.
pub async fn clear_previous_translations(config: &Config) -> Result<usize> {
    let plugins = config.repo_path(&config.repo.plugins_dir);
    let plugin_names = list_dir_names(&plugins).await?;

    let mut removed = 0;
    for dir in translation_dirs(config, &plugin_names) {
        if !is_real_dir(&dir.path).await {
            if dir.required {
                anyhow::bail!("locale directory {} does not exist", dir.path.display());
            }
            continue;
        }
        let count = clear_dir_except(&dir.path, &config.repo.base_locale_file).await?;
        debug!(dir = %dir.path.display(), removed = count, "cleared translations");
        removed += count;
    }

    info!(removed, "removed previous translations");
    Ok(removed)
}

/// Reshape the extracted archive to mirror the project tree.
///
/// # Errors
///
/// Returns an error if a staged directory cannot be removed or moved.
pub async fn arrange_staging(staging: &Path, config: &Config) -> Result<()> {
    remove_path_if_exists(&staging.join(WEBSITE_DIR)).await?;

    let staged_plugins = staging.join(&config.repo.plugins_dir);
    for name in &config.repo.submodules {
        let from = staging.join(name);
        if !is_real_dir(&from).await {
            warn!(submodule = %name, "archive has no translations for submodule");
            continue;
        }
        move_dir_async(&from, &staged_plugins.join(name)).await?;
    }
    Ok(())
}

/// Copy the staged `UI` and plugins trees over the project.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns an error if copying fails.
pub async fn apply_staging(staging: &Path, config: &Config) -> Result<usize> {
    let mut copied = 0;
    for tree in [Path::new(UI_DIR), config.repo.plugins_dir.as_path()] {
        let from = staging.join(tree);
        if !is_real_dir(&from).await {
            warn!(tree = %tree.display(), "nothing staged");
            continue;
        }
        copied += copy_dir_contents_async(&from, &config.repo_path(tree)).await?;
    }
    info!(files = copied, "applied staged translations");
    Ok(copied)
}
