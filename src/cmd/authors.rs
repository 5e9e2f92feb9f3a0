// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `authors` command: regenerate the credits file without touching translations.

use crate::authors::generate_credits;
use crate::config::Config;
use crate::crowdin::CrowdinClient;
use crate::error::Result;

use super::git_runner;

/// # Errors
///
/// Returns an error if no token is configured or credit generation fails.
pub async fn run_authors_command(config: &Config) -> Result<()> {
    let token = config.require_token()?;
    let runner = git_runner(config.global.dry)?;
    let client = CrowdinClient::from_config(&config.crowdin, token);
    generate_credits(runner.as_ref(), &client, config).await
}
