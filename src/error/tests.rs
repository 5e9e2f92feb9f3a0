// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, CrowdinError, GitError, SyncError, SyncResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "crowdin".to_string(),
        key: "token".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'token' in section '[crowdin]'");
}

#[test]
fn test_git_error_boxes_into_sync_error() {
    let err: SyncError = GitError::CommandFailed {
        command: "git push".to_string(),
        message: "rejected".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"git error: git command failed: git push - rejected");
}

#[test]
fn test_job_failed_display() {
    let err = CrowdinError::JobFailed {
        job: "build",
        id: "42".to_string(),
        status: "failed".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"build 42 ended with status 'failed'");
}

#[test]
fn test_sync_error_size() {
    // Every variant is a single Box, so the enum is pointer + discriminant
    let size = std::mem::size_of::<SyncError>();
    assert!(size <= 24, "SyncError is {size} bytes, expected <= 24");
}

#[test]
fn test_sync_result_size() {
    let size = std::mem::size_of::<SyncResult<()>>();
    assert!(size <= 24, "SyncResult<()> is {size} bytes, expected <= 24");
}
