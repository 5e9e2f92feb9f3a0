// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed git commands issued by the workflow.
//!
//! ```text
//! cmd.rs --> &dyn GitRunner --> git (or a recording fake in tests)
//! ```

use crate::error::SyncResult;
use std::path::Path;

use super::backend::GitRunner;

/// Where `git config` writes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `git config --global`
    Global,
    /// `git config` in the given repository
    Local,
}

/// `git diff <base> <head>`; an empty string means no committed difference.
///
/// # Errors
///
/// Returns a `GitError` if either revision is unknown.
pub fn diff(runner: &dyn GitRunner, repo: &Path, base: &str, head: &str) -> SyncResult<String> {
    runner.run(&["diff", base, head], repo)
}

/// `git checkout <what>`.
///
/// # Errors
///
/// Returns a `GitError` if the checkout fails.
pub fn checkout(runner: &dyn GitRunner, repo: &Path, what: &str) -> SyncResult<()> {
    runner.run(&["checkout", what], repo)?;
    Ok(())
}

/// `git status --porcelain`: one `XY path` line per changed path.
///
/// # Errors
///
/// Returns a `GitError` if the status cannot be read.
pub fn status_porcelain(runner: &dyn GitRunner, repo: &Path) -> SyncResult<String> {
    runner.run(&["status", "--porcelain"], repo)
}

/// True if `git status --porcelain` reports anything.
///
/// # Errors
///
/// Returns a `GitError` if the status cannot be read.
pub fn has_changes(runner: &dyn GitRunner, repo: &Path) -> SyncResult<bool> {
    Ok(!status_porcelain(runner, repo)?.trim().is_empty())
}

/// True if the index holds something to commit.
///
/// Unstaged and untracked entries (`' '` or `'?'` in the index column) do not count.
///
/// # Errors
///
/// Returns a `GitError` if the status cannot be read.
pub fn has_staged_changes(runner: &dyn GitRunner, repo: &Path) -> SyncResult<bool> {
    let status = status_porcelain(runner, repo)?;
    Ok(status
        .lines()
        .any(|line| line.chars().next().is_some_and(|x| x != ' ' && x != '?')))
}

/// `git add .`
///
/// # Errors
///
/// Returns a `GitError` if staging fails.
pub fn add_all(runner: &dyn GitRunner, repo: &Path) -> SyncResult<()> {
    runner.run(&["add", "."], repo)?;
    Ok(())
}

/// `git reset -- <path>`: unstage one path.
///
/// # Errors
///
/// Returns a `GitError` if the reset fails.
pub fn reset_path(runner: &dyn GitRunner, repo: &Path, path: &str) -> SyncResult<()> {
    runner.run(&["reset", "-q", "--", path], repo)?;
    Ok(())
}

/// `git commit -m <message>`.
///
/// # Errors
///
/// Returns a `GitError` if the commit fails.
pub fn commit(runner: &dyn GitRunner, repo: &Path, message: &str) -> SyncResult<()> {
    runner.run(&["commit", "-m", message], repo)?;
    Ok(())
}

/// `git push` to the configured upstream.
///
/// # Errors
///
/// Returns a `GitError` if the push is rejected or the remote is unreachable.
pub fn push(runner: &dyn GitRunner, repo: &Path) -> SyncResult<()> {
    runner.run(&["push"], repo)?;
    Ok(())
}

/// Set a git config value.
///
/// # Errors
///
/// Returns a `GitError` if the config value cannot be set.
pub fn set_config(
    runner: &dyn GitRunner,
    repo: &Path,
    scope: ConfigScope,
    key: &str,
    value: &str,
) -> SyncResult<()> {
    match scope {
        ConfigScope::Global => runner.run(&["config", "--global", key, value], repo)?,
        ConfigScope::Local => runner.run(&["config", key, value], repo)?,
    };
    Ok(())
}

/// `git shortlog --all -sn --no-merges`: commit counts per author, descending.
///
/// # Errors
///
/// Returns a `GitError` if the history cannot be read.
pub fn shortlog(runner: &dyn GitRunner, repo: &Path) -> SyncResult<String> {
    runner.run(&["shortlog", "--all", "-sn", "--no-merges"], repo)
}
