// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. obs-translation-updater.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. OBSTU_* env vars
//! 5. CLI overrides (--root, --dry, --token / CROWDIN_PERSONAL_TOKEN)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! OBSTU_GLOBAL__DRY=true             → global.dry = true
//! OBSTU_CROWDIN__PROJECT_ID=1234     → crowdin.project_id = 1234
//! OBSTU_REPO__SUBMODULES=a,b         → repo.submodules = ["a", "b"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SyncResult};

use loader::ConfigLoader;
use types::{CommitterConfig, CrowdinConfig, GlobalConfig, RepoConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "obs-translation-updater.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "OBSTU";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Crowdin API settings.
    pub crowdin: CrowdinConfig,
    /// Repository layout.
    pub repo: RepoConfig,
    /// Commit identity.
    pub committer: CommitterConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use obs_translation_updater::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("obs-translation-updater.toml")
    ///     .with_env_prefix("OBSTU")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Config` structure, or fails validation.
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty branch, an empty or
    /// duplicated submodule name, or a submodule name containing a path separator.
    pub fn validate(&self) -> SyncResult<()> {
        if self.repo.branch.trim().is_empty() {
            return Err(invalid("repo", "branch", "must not be empty").into());
        }
        let mut seen = std::collections::BTreeSet::new();
        for name in &self.repo.submodules {
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(invalid(
                    "repo",
                    "submodules",
                    &format!("'{name}' is not a plain directory name"),
                )
                .into());
            }
            if !seen.insert(name.as_str()) {
                return Err(invalid("repo", "submodules", &format!("'{name}' listed twice")).into());
            }
        }
        Ok(())
    }

    /// Returns the Crowdin token or a `MissingKey` error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when no token was configured.
    pub fn require_token(&self) -> SyncResult<&str> {
        if self.crowdin.token.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "crowdin".to_string(),
                key: "token".to_string(),
            }
            .into());
        }
        Ok(&self.crowdin.token)
    }

    /// Resolve a repository-relative path against `repo.root`.
    #[must_use]
    pub fn repo_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.repo.root.join(relative)
    }

    /// Format configuration options for display.
    ///
    /// The token is shown as `[hidden]`. Output is sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_crowdin_options(&mut options);
        self.format_repo_options(&mut options);
        self.format_committer_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_crowdin_options(&self, options: &mut BTreeMap<String, String>) {
        let crowdin = &self.crowdin;
        options.insert("crowdin.project_id".into(), crowdin.project_id.to_string());
        options.insert("crowdin.api_url".into(), crowdin.api_url.clone());
        if !crowdin.token.is_empty() {
            options.insert("crowdin.token".into(), "[hidden]".into());
        }
        options.insert(
            "crowdin.poll_interval_ms".into(),
            crowdin.poll_interval_ms.to_string(),
        );
        options.insert("crowdin.reuse_build".into(), crowdin.reuse_build.to_string());
        options.insert(
            "crowdin.report_date_from".into(),
            crowdin.report_date_from.clone(),
        );
        options.insert("crowdin.report_date_to".into(), crowdin.report_date_to.clone());
        options.insert(
            "crowdin.members_limit".into(),
            crowdin.members_limit.to_string(),
        );
    }

    fn format_repo_options(&self, options: &mut BTreeMap<String, String>) {
        let repo = &self.repo;
        options.insert("repo.root".into(), repo.root.display().to_string());
        options.insert("repo.branch".into(), repo.branch.clone());
        options.insert("repo.submodules".into(), repo.submodules.join(", "));
        options.insert(
            "repo.plugins_dir".into(),
            repo.plugins_dir.display().to_string(),
        );
        options.insert(
            "repo.ui_locale_dir".into(),
            repo.ui_locale_dir.display().to_string(),
        );
        options.insert("repo.base_locale_file".into(), repo.base_locale_file.clone());
        options.insert(
            "repo.desktop_entry".into(),
            repo.desktop_entry.display().to_string(),
        );
        options.insert(
            "repo.authors_file".into(),
            repo.authors_file.display().to_string(),
        );
    }

    fn format_committer_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("committer.name".into(), self.committer.name.clone());
        options.insert("committer.email".into(), self.committer.email.clone());
        options.insert("committer.message".into(), self.committer.message.clone());
        options.insert("committer.global".into(), self.committer.global.to_string());
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
