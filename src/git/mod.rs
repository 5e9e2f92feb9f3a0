// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!          cmd.rs
//!            |
//!            v
//!   ,------------------,
//!   | backend (traits) |
//!   '--+----------+----'
//!      |          |
//!      v          v
//!  GitRunner   GixBackend
//!  (CLI)       (gix, read)
//!      |          .is_repo_root
//!  ShellBackend   .current_branch
//!  DryRunBackend
//! ```
//!
//! **`ShellBackend`**: git CLI; diff/checkout/status/add/commit/push/reset.
//! **`GixBackend`**: pure Rust, no subprocess, read-only sanity checks.

pub mod backend;
pub mod cmd;

#[cfg(test)]
pub(crate) mod testing;
