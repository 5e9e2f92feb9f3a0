// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localized keys of the freedesktop entry.
//!
//! ```text
//! base .desktop                      staging/desktop-entry/fr-FR.ini
//!   [Desktop Entry]                    GenericName="Logiciel de streaming"
//!   GenericName=Streaming Software     Comment="Enregistrer et diffuser"
//!   GenericName[de-DE]=...  (dropped)
//!        |                                   |
//!        v                                   v
//!   [Desktop Entry]
//!   GenericName=Streaming Software
//!                                    <-- one blank line
//!   GenericName[fr-FR]=Logiciel de streaming
//!   Comment[fr-FR]=Enregistrer et diffuser
//! ```


use std::path::Path;

use anyhow::Context;
use tokio::fs;
use tracing::{debug, info};

use crate::error::{FsError, Result};

/// Keys whose localized variants are regenerated on every run.
const LOCALIZED_KEYS: &[&str] = &["GenericName[", "Comment["];

/// Strings of one language as staged from the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    /// Language code, the staged file name without extension.
    pub language: String,
    pub content: String,
}

/// Value between the first and the last double quote, or the trimmed raw value.
fn unquote(raw: &str) -> &str {
    match (raw.find('"'), raw.rfind('"')) {
        (Some(first), Some(last)) if first < last => &raw[first + 1..last],
        _ => raw.trim(),
    }
}

/// Rebuild the desktop entry from its base text and per-language strings.
///
/// Empty lines and previous `GenericName[..]`/`Comment[..]` lines are dropped,
/// everything else is kept verbatim. Languages appear in the given order.
#[must_use]
pub fn patch_desktop_entry(base: &str, localized: &[LocalizedEntry]) -> String {
    let mut out = String::new();
    for line in base.trim().split('\n') {
        if line.is_empty() || LOCALIZED_KEYS.iter().any(|key| line.starts_with(key)) {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    for entry in localized {
        let content = entry.content.trim();
        if content.is_empty() {
            continue;
        }
        for line in content.split('\n') {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            out.push_str(key);
            out.push('[');
            out.push_str(&entry.language);
            out.push_str("]=");
            out.push_str(unquote(value));
            out.push('\n');
        }
    }
    out
}

/// Staged per-language files in directory enumeration order.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory does not exist, or an I/O error.
pub async fn read_localized_entries(dir: &Path) -> Result<Vec<LocalizedEntry>> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Err(FsError::NotFound(dir.display().to_string()).into());
    }

    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    let mut localized = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let Some(language) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        localized.push(LocalizedEntry { language, content });
    }
    Ok(localized)
}

/// Rewrite `desktop_file` with the languages staged in `staged_dir`.
///
/// Returns the number of languages that contributed keys.
///
/// # Errors
///
/// Returns an error if either input cannot be read or the file cannot be written.
pub async fn patch_desktop_file(desktop_file: &Path, staged_dir: &Path) -> Result<usize> {
    let base = fs::read_to_string(desktop_file)
        .await
        .with_context(|| format!("failed to read {}", desktop_file.display()))?;
    let localized = read_localized_entries(staged_dir).await?;
    let languages = localized
        .iter()
        .filter(|entry| !entry.content.trim().is_empty())
        .count();
    debug!(files = localized.len(), languages, "read desktop entry strings");

    fs::write(desktop_file, patch_desktop_entry(&base, &localized))
        .await
        .with_context(|| format!("failed to write {}", desktop_file.display()))?;
    info!(path = %desktop_file.display(), languages, "patched desktop entry");
    Ok(languages)
}
