// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   sync, authors, config (options, config-files)
//! ```

pub mod authors;
pub mod config;
pub mod sync;

use crate::error::SyncResult;
use crate::git::backend::{DryRunBackend, GitRunner, ShellBackend};

/// The git runner for this invocation; a dry run only logs mutating commands.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if git is not installed.
pub fn git_runner(dry: bool) -> SyncResult<Box<dyn GitRunner>> {
    let shell = ShellBackend::new()?;
    let runner: Box<dyn GitRunner> = if dry {
        Box::new(DryRunBackend::new(shell))
    } else {
        Box::new(shell)
    };
    Ok(runner)
}
