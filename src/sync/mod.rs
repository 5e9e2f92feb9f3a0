// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule-aware commit and push.
//!
//! ```text
//! prepare_build()                          push_changes(detached)
//!   per submodule (config order)             identity (git config)
//!     git diff <branch> HEAD                 per submodule
//!       non-empty --> detached                 status empty --> skip
//!     git checkout <branch>                    add . / commit / push
//!        |                                   parent
//!        v                                     add .
//!   DetachedSubmodules  ------------------->   reset -- plugins/<detached>
//!                                              nothing staged --> skip
//!                                              commit / push
//! ```
//!
//! A detached submodule has commits that its branch does not have. Its
//! translations are still committed and pushed inside the submodule, but the
//! parent keeps pointing at the old commit so that the unmerged work is not
//! published through the parent repository.
//!
//! Every git command gets its working directory explicitly; the process
//! working directory never changes.


use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::config::types::CommitterConfig;
use crate::error::{GitError, SyncResult};
use crate::git::backend::{GitRunner, GixBackend};
use crate::git::cmd::{self, ConfigScope};

/// Repository root, plugin submodules and the branch they track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    plugins_dir: PathBuf,
    submodules: Vec<String>,
    branch: String,
}

impl Workspace {
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        plugins_dir: impl Into<PathBuf>,
        submodules: Vec<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            plugins_dir: plugins_dir.into(),
            submodules,
            branch: branch.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.repo.root,
            &config.repo.plugins_dir,
            config.repo.submodules.clone(),
            &config.repo.branch,
        )
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn submodules(&self) -> &[String] {
        &self.submodules
    }

    #[must_use]
    pub fn submodule_path(&self, name: &str) -> PathBuf {
        self.root.join(&self.plugins_dir).join(name)
    }

    /// Path of a submodule relative to the root, with `/` separators.
    #[must_use]
    pub fn pathspec(&self, name: &str) -> String {
        let plugins = self.plugins_dir.to_string_lossy().replace('\\', "/");
        let plugins = plugins.trim_end_matches('/');
        if plugins.is_empty() || plugins == "." {
            name.to_string()
        } else {
            format!("{plugins}/{name}")
        }
    }
}

/// Submodules whose checkout was ahead of their tracked branch.
///
/// Produced by [`prepare_build`], consumed by [`push_changes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetachedSubmodules {
    names: Vec<String>,
}

impl DetachedSubmodules {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn insert(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }
}

impl<S: Into<String>> FromIterator<S> for DetachedSubmodules {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut detached = Self::default();
        for name in iter {
            detached.insert(&name.into());
        }
        detached
    }
}

/// What [`push_changes`] committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushSummary {
    /// Submodules that were committed and pushed, in processing order.
    pub submodules: Vec<String>,
    /// Whether the parent repository was committed and pushed.
    pub parent: bool,
}

/// Fail early when a configured submodule is not checked out as its own repository.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` for the first submodule that is missing or
/// not initialized.
pub fn check_submodules(workspace: &Workspace) -> SyncResult<()> {
    for name in workspace.submodules() {
        let path = workspace.submodule_path(name);
        if !GixBackend::is_repo_root(&path) {
            return Err(GitError::RepoNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Record detached submodules and switch every submodule to its branch.
///
/// # Errors
///
/// Any failing git command aborts the run.
pub fn prepare_build(runner: &dyn GitRunner, workspace: &Workspace) -> SyncResult<DetachedSubmodules> {
    let mut detached = DetachedSubmodules::default();

    for name in workspace.submodules() {
        let path = workspace.submodule_path(name);
        let diff = cmd::diff(runner, &path, &workspace.branch, "HEAD")?;
        if diff.is_empty() {
            debug!(submodule = %name, branch = %workspace.branch, "submodule matches branch");
        } else {
            info!(submodule = %name, branch = %workspace.branch, "submodule is ahead of its branch");
            detached.insert(name);
        }
        cmd::checkout(runner, &path, &workspace.branch)?;
    }

    Ok(detached)
}

fn set_identity(
    runner: &dyn GitRunner,
    repo: &Path,
    scope: ConfigScope,
    committer: &CommitterConfig,
) -> SyncResult<()> {
    cmd::set_config(runner, repo, scope, "user.name", &committer.name)?;
    cmd::set_config(runner, repo, scope, "user.email", &committer.email)
}

fn commit_and_push(
    runner: &dyn GitRunner,
    repo: &Path,
    committer: &CommitterConfig,
) -> SyncResult<()> {
    if !committer.global {
        set_identity(runner, repo, ConfigScope::Local, committer)?;
    }
    cmd::commit(runner, repo, &committer.message)?;
    cmd::push(runner, repo)
}

/// Commit and push changed submodules, then the parent repository without
/// the pointers of detached submodules.
///
/// # Errors
///
/// Any failing git command aborts the run; earlier pushes are not undone.
pub fn push_changes(
    runner: &dyn GitRunner,
    workspace: &Workspace,
    detached: &DetachedSubmodules,
    committer: &CommitterConfig,
) -> SyncResult<PushSummary> {
    let mut summary = PushSummary::default();

    if committer.global {
        set_identity(runner, workspace.root(), ConfigScope::Global, committer)?;
    }

    for name in workspace.submodules() {
        let path = workspace.submodule_path(name);
        if !cmd::has_changes(runner, &path)? {
            debug!(submodule = %name, "no changes in submodule");
            continue;
        }
        cmd::add_all(runner, &path)?;
        commit_and_push(runner, &path, committer)?;
        info!(submodule = %name, "pushed submodule");
        summary.submodules.push(name.clone());
    }

    let root = workspace.root();
    cmd::add_all(runner, root)?;
    for name in detached.iter() {
        cmd::reset_path(runner, root, &workspace.pathspec(name))?;
        info!("{name} has commits not pushed to the main repository. Only pushing to submodule.");
    }

    if !cmd::has_staged_changes(runner, root)? {
        info!("No changes in main repository. Skipping push.");
        return Ok(summary);
    }

    commit_and_push(runner, root, committer)?;
    info!("pushed main repository");
    summary.parent = true;
    Ok(summary)
}
