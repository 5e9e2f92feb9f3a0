// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording git runner for workflow tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::backend::GitRunner;
use crate::error::{GitError, SyncResult};

/// One recorded invocation: working directory and joined arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub(crate) cwd: PathBuf,
    pub(crate) command: String,
}

struct Rule {
    cwd: PathBuf,
    command: String,
    response: Result<String, String>,
}

/// Answers scripted commands, returns "" for everything else, and records all calls.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    rules: Vec<Rule>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `command` run in `cwd` with `stdout`.
    pub(crate) fn respond(mut self, cwd: impl AsRef<Path>, command: &str, stdout: &str) -> Self {
        self.rules.push(Rule {
            cwd: cwd.as_ref().to_path_buf(),
            command: command.to_string(),
            response: Ok(stdout.to_string()),
        });
        self
    }

    /// Fail `command` run in `cwd`.
    pub(crate) fn fail(mut self, cwd: impl AsRef<Path>, command: &str) -> Self {
        self.rules.push(Rule {
            cwd: cwd.as_ref().to_path_buf(),
            command: command.to_string(),
            response: Err("scripted failure".to_string()),
        });
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls poisoned").clone()
    }

    /// Commands run in `cwd`, in order.
    pub(crate) fn commands_in(&self, cwd: impl AsRef<Path>) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.cwd == cwd.as_ref())
            .map(|call| call.command)
            .collect()
    }
}

impl GitRunner for RecordingRunner {
    fn run(&self, args: &[&str], cwd: &Path) -> SyncResult<String> {
        let command = args.join(" ");
        self.calls.lock().expect("calls poisoned").push(Call {
            cwd: cwd.to_path_buf(),
            command: command.clone(),
        });

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.command == command && rule.cwd == cwd);
        match rule.map(|rule| &rule.response) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(message)) => Err(GitError::CommandFailed {
                command: format!("git {command}"),
                message: message.clone(),
            }
            .into()),
            None => Ok(String::new()),
        }
    }
}
