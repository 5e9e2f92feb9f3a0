// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitRunner (trait, captured stdout)
//!   ShellBackend   git CLI, every command the workflow issues
//!   DryRunBackend  wraps a runner, lets read-only commands through
//! GixBackend       pure Rust checks (repo root, current branch)
//! ```

use crate::error::{GitError, GixError, ProcessError, SyncResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Executes git with arguments in a working directory.
///
/// This is the only gateway to the `git` executable. Implementations return
/// the captured standard output; a non-zero exit is a `GitError::CommandFailed`.
pub trait GitRunner: Send + Sync {
    /// Run `git <args>` inside `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be spawned or exits with a non-zero status.
    fn run(&self, args: &[&str], cwd: &Path) -> SyncResult<String>;
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
    envs: Vec<(String, String)>,
}

impl ShellBackend {
    /// Locate `git` in `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git is not installed.
    pub fn new() -> SyncResult<Self> {
        let program = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;
        Ok(Self::with_program(program))
    }

    /// Use an explicit git executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Add an environment variable passed to every git invocation.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

impl GitRunner for ShellBackend {
    /// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    fn run(&self, args: &[&str], cwd: &Path) -> SyncResult<String> {
        use std::process::Command;

        let command = format!("git {}", args.join(" "));
        debug!(cwd = %cwd.display(), %command, "running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

// --- DryRunBackend ---

/// Subcommands that never modify a repository.
const READ_ONLY: &[&str] = &["diff", "status", "shortlog", "rev-parse", "log"];

/// Runs read-only commands for real and only logs mutating ones.
#[derive(Debug, Clone)]
pub struct DryRunBackend<R> {
    inner: R,
}

impl<R: GitRunner> DryRunBackend<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: GitRunner> GitRunner for DryRunBackend<R> {
    fn run(&self, args: &[&str], cwd: &Path) -> SyncResult<String> {
        if args.first().is_some_and(|sub| READ_ONLY.contains(sub)) {
            return self.inner.run(args, cwd);
        }
        info!(
            cwd = %cwd.display(),
            "[dry-run] would run git {}",
            args.join(" ")
        );
        Ok(String::new())
    }
}

// --- GixBackend (Pure Rust) ---

/// Read-only repository checks without spawning git.
pub struct GixBackend;

impl GixBackend {
    /// True if `path` is the root of a work tree (a `.git` directory or file).
    ///
    /// A plain subdirectory of another repository, such as an uninitialized
    /// submodule, is not a repository root.
    #[must_use]
    pub fn is_repo_root(path: &Path) -> bool {
        gix::open(path).is_ok()
    }

    /// Current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    pub fn current_branch(path: &Path) -> SyncResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}
