// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Real git repositories for integration tests.
//!
//! A parent checkout with plugin repositories nested under `plugins/`, each
//! pushing to its own bare remote. Global git configuration is redirected
//! into the temp directory.

#![allow(dead_code)]

use obs_translation_updater::sync::Workspace;
use obs_translation_updater::git::backend::ShellBackend;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Scratch area: `home/` (global git config), `remotes/`, `work/` (parent checkout).
pub struct Fixture {
    pub temp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = temp_dir();
        for dir in ["home", "remotes", "work"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        Self { temp }
    }

    pub fn global_config(&self) -> PathBuf {
        self.temp.path().join("home").join("gitconfig")
    }

    pub fn work(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    pub fn remote(&self, name: &str) -> PathBuf {
        self.temp.path().join("remotes").join(format!("{name}.git"))
    }

    pub fn plugin(&self, name: &str) -> PathBuf {
        self.work().join("plugins").join(name)
    }

    /// Run git as the test author; panics on failure.
    pub fn git(&self, cwd: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GIT_CONFIG_GLOBAL", self.global_config())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@test.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@test.com")
            .output()
            .expect("failed to spawn git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub fn runner(&self) -> ShellBackend {
        ShellBackend::new()
            .unwrap()
            .env("GIT_CONFIG_GLOBAL", self.global_config().display().to_string())
            .env("GIT_CONFIG_NOSYSTEM", "1")
    }

    /// Create a repository at `dir` with one commit, pushed to a new bare remote.
    pub fn init_pushed_repo(&self, dir: &Path, remote: &Path, file: &str) {
        fs::create_dir_all(dir).unwrap();
        let remote = remote.to_str().unwrap();
        self.git(dir.parent().unwrap(), &["init", "-q", "--bare", "-b", "master", remote]);
        self.git(dir, &["init", "-q", "-b", "master"]);
        fs::write(dir.join(file), "initial\n").unwrap();
        self.git(dir, &["add", "."]);
        self.git(dir, &["commit", "-q", "-m", "Initial commit"]);
        self.git(dir, &["remote", "add", "origin", remote]);
        self.git(dir, &["push", "-q", "-u", "origin", "master"]);
    }

    /// Parent checkout with the given plugins nested under `plugins/`.
    pub fn with_plugins(names: &[&str]) -> Self {
        Self::with_tree(names, &[("AUTHORS", "old\n")])
    }

    /// Like [`Fixture::with_plugins`], with extra files committed in the parent.
    pub fn with_tree(names: &[&str], files: &[(&str, &str)]) -> Self {
        let fixture = Self::new();
        for name in names {
            fixture.init_pushed_repo(&fixture.plugin(name), &fixture.remote(name), "README.md");
        }
        let work = fixture.work();
        for (path, content) in files {
            let path = work.join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        fixture.git(&work, &["init", "-q", "-b", "master"]);
        fixture.git(&work, &["add", "."]);
        fixture.git(&work, &["commit", "-q", "-m", "Initial commit"]);
        let main = fixture.remote("main");
        fixture.git(&work, &["init", "-q", "--bare", "-b", "master", main.to_str().unwrap()]);
        fixture.git(&work, &["remote", "add", "origin", main.to_str().unwrap()]);
        fixture.git(&work, &["push", "-q", "-u", "origin", "master"]);
        fixture
    }

    pub fn workspace(&self, names: &[&str]) -> Workspace {
        Workspace::new(
            self.work(),
            "plugins",
            names.iter().map(ToString::to_string).collect(),
            "master",
        )
    }

    /// Put `name` on a feature branch with a commit master does not have.
    pub fn commit_ahead(&self, name: &str) {
        let dir = self.plugin(name);
        self.git(&dir, &["checkout", "-q", "-b", "feature"]);
        fs::write(dir.join("feature.txt"), "unmerged\n").unwrap();
        self.git(&dir, &["add", "."]);
        self.git(&dir, &["commit", "-q", "-m", "Unmerged work"]);
    }

    pub fn write_translation(&self, dir: &Path, language: &str) {
        let locale = dir.join("data").join("locale");
        fs::create_dir_all(&locale).unwrap();
        fs::write(locale.join(format!("{language}.ini")), "Key=\"Wert\"\n").unwrap();
    }

    pub fn remote_log(&self, name: &str) -> Vec<String> {
        self.git(&self.remote(name), &["log", "--format=%an|%s", "master"])
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    pub fn gitlink(&self, rev: &str, name: &str) -> String {
        self.git(&self.work(), &["rev-parse", &format!("{rev}:plugins/{name}")])
    }
}
