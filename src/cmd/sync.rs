// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `sync` command: the whole translation update.
//!
//! ```text
//! check submodules --> clear old translations --> prepare_build
//!        |
//!        v
//!   git shortlog (contributors)
//!        |
//!        v
//!   try_join ----------------------------+
//!   |  credits                           |  build
//!   |  blocked + reports                 |  acquire --> download --> stage
//!   |  --> AUTHORS                       |  --> arrange --> apply to tree
//!   +------------------------------------+
//!        |
//!        v
//! patch desktop entry --> drop staging --> push_changes(detached)
//! ```
//!
//! Any failure stops the run at that point; nothing is rolled back.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::authors::{read_contributors, write_credits};
use crate::cli::SyncArgs;
use crate::config::Config;
use crate::crowdin::CrowdinClient;
use crate::desktop::patch_desktop_file;
use crate::error::Result;
use crate::git::backend::GitRunner;
use crate::locale::StagingArea;
use crate::locale::archive::extract_to_staging;
use crate::locale::layout::{apply_staging, arrange_staging, clear_previous_translations};
use crate::locale::normalize::Normalizer;
use crate::sync::{PushSummary, Workspace, check_submodules, prepare_build, push_changes};

use super::git_runner;

/// Run the `sync` command with the configured git and Crowdin backends.
///
/// # Errors
///
/// Returns an error if no token is configured or any step fails.
pub async fn run_sync_command(args: &SyncArgs, config: &Config) -> Result<()> {
    let token = config.require_token()?;
    let runner = git_runner(config.global.dry)?;
    let client = CrowdinClient::from_config(&config.crowdin, token);
    let reuse = config.crowdin.reuse_build && !args.new_build;

    run_sync(runner.as_ref(), &client, config, reuse).await?;
    Ok(())
}

/// The full update against explicit backends.
///
/// # Errors
///
/// Returns the first error of any step.
pub async fn run_sync(
    runner: &dyn GitRunner,
    client: &CrowdinClient,
    config: &Config,
    reuse_build: bool,
) -> Result<PushSummary> {
    let workspace = Workspace::from_config(config);
    check_submodules(&workspace).context("submodules are not checked out")?;

    clear_previous_translations(config).await?;

    let detached = prepare_build(runner, &workspace).context("failed to prepare submodules")?;
    info!(detached = detached.len(), "submodules switched to their branch");

    let staging = StagingArea::new()?;
    let normalizer = Normalizer::new()?;
    // git runs synchronously, so the history is read before the HTTP work starts
    let contributors = read_contributors(runner, config)?;
    tokio::try_join!(
        write_credits(client, config, &contributors),
        fetch_translations(client, reuse_build, staging.path(), &normalizer, config),
    )?;

    let desktop_file = config.repo_path(&config.repo.desktop_entry);
    patch_desktop_file(&desktop_file, &staging.desktop_entry_dir()).await?;
    staging.close()?;

    let summary = push_changes(runner, &workspace, &detached, &config.committer)
        .context("failed to push changes")?;
    info!(
        submodules = summary.submodules.len(),
        parent = summary.parent,
        "translation update finished"
    );
    Ok(summary)
}

async fn fetch_translations(
    client: &CrowdinClient,
    reuse_build: bool,
    staging: &Path,
    normalizer: &Normalizer,
    config: &Config,
) -> Result<()> {
    let build = client
        .acquire_build(reuse_build)
        .await
        .context("failed to obtain a translation build")?;
    let archive = client
        .download_translations(build)
        .await
        .context("failed to download translations")?;

    let summary = extract_to_staging(&archive, staging, normalizer).await?;
    info!(
        files = summary.files,
        discarded = summary.discarded,
        "extracted translations"
    );

    arrange_staging(staging, config).await?;
    apply_staging(staging, config).await?;
    Ok(())
}
