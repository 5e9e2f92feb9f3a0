// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, CrowdinConfig, RepoConfig, CommitterConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Run every step but only log git commands that modify repositories.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Crowdin project and API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrowdinConfig {
    /// Numeric Crowdin project id.
    pub project_id: u64,
    /// Base URL of the v2 API.
    pub api_url: String,
    /// Personal access token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Delay between two status polls of a build or report.
    pub poll_interval_ms: u64,
    /// Reuse the latest build when it is already finished.
    pub reuse_build: bool,
    /// Start of the top-members report range.
    pub report_date_from: String,
    /// End of the top-members report range.
    pub report_date_to: String,
    /// Page size when listing blocked project members.
    pub members_limit: u32,
}

impl CrowdinConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for CrowdinConfig {
    fn default() -> Self {
        Self {
            project_id: 51028,
            api_url: "https://api.crowdin.com/api/v2".to_string(),
            token: String::new(),
            poll_interval_ms: 3000,
            reuse_build: true,
            report_date_from: "2014-01-01T00:00:00+00:00".to_string(),
            report_date_to: "2030-01-01T00:00:00+00:00".to_string(),
            members_limit: 500,
        }
    }
}

/// Layout of the repository being updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Repository root; relative paths below are resolved against it.
    pub root: PathBuf,
    /// Integration branch every submodule is reset to.
    pub branch: String,
    /// Submodules under `plugins_dir`, in processing order.
    pub submodules: Vec<String>,
    /// Directory holding the plugin checkouts.
    pub plugins_dir: PathBuf,
    /// Locale directory of the main UI.
    pub ui_locale_dir: PathBuf,
    /// Source-language file that is never deleted.
    pub base_locale_file: String,
    /// Desktop entry patched with localized keys.
    pub desktop_entry: PathBuf,
    /// Credits file regenerated on every run.
    pub authors_file: PathBuf,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            branch: "master".to_string(),
            submodules: vec![
                "enc-amf".to_string(),
                "obs-browser".to_string(),
                "obs-vst".to_string(),
            ],
            plugins_dir: PathBuf::from("plugins"),
            ui_locale_dir: PathBuf::from("UI/data/locale"),
            base_locale_file: "en-US.ini".to_string(),
            desktop_entry: PathBuf::from("UI/xdg-data/com.obsproject.Studio.desktop"),
            authors_file: PathBuf::from("AUTHORS"),
        }
    }
}

/// Identity and message used for the automated commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitterConfig {
    /// `user.name`; also filtered out of the contributors list.
    pub name: String,
    /// `user.email`; `<>` marks an automation actor.
    pub email: String,
    /// Commit message for submodules and the parent repository.
    pub message: String,
    /// Write the identity with `git config --global` instead of per repository.
    pub global: bool,
}

impl Default for CommitterConfig {
    fn default() -> Self {
        Self {
            name: "Translation Updater".to_string(),
            email: "<>".to_string(),
            message: "Update translations from Crowdin".to_string(),
            global: true,
        }
    }
}
