// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --dry             ← Log mutating git commands instead of running them
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Enables file logging
//! --root DIR        ← repo.root override
//! --token TOKEN     ← crowdin.token (or CROWDIN_PERSONAL_TOKEN)
//!
//! Precedence: CLI flags > OBSTU_* env > --config > obs-translation-updater.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Runs read-only git commands but only logs commits, checkouts and pushes.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Root of the OBS Studio checkout.
    #[arg(short = 'C', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Crowdin personal access token.
    #[arg(
        long,
        env = "CROWDIN_PERSONAL_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides: Vec<(&'static str, config::Value)> = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", i64::from(level).into()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", i64::from(level).into()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string().into()));
        }

        if self.dry {
            overrides.push(("global.dry", true.into()));
        }

        if let Some(ref root) = self.root {
            overrides.push(("repo.root", root.display().to_string().into()));
        }

        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            overrides.push(("crowdin.token", token.to_string().into()));
        }

        overrides
    }
}
