// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              SyncError (~24 bytes)
//!                     |
//!     +------+----+--+------+------+-------+
//!     |      |       |      |      |       |
//!     v      v       v      v      v       v
//!    Git    Net   Crowdin Archive Cfg  Proc/Fs/Io
//!    Box    Box    Box     Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, RepoNotFound
//!   Network  Reqwest, HttpError, InvalidUrl
//!   Crowdin  JobFailed
//!   Archive  Zip, UnsafePath, Read
//!   Config   MissingKey, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed
//!   Fs       NotFound, IoError
//!
//! All variants boxed => SyncError fits in 24 bytes.
//! ```
//!
//! There is exactly one error tier: every failure bubbles up to `main`,
//! is logged, and fails the run.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SyncError`].
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Crowdin API returned something the workflow cannot continue with.
    #[error("crowdin error: {0}")]
    Crowdin(#[from] Box<CrowdinError>),

    /// Translation archive could not be read.
    #[error("archive error: {0}")]
    Archive(#[from] Box<ArchiveError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SyncError {
                fn from(err: $error) -> Self {
                    SyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    CrowdinError => Crowdin,
    ArchiveError => Archive,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Git command exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body was not the JSON we expected.
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

// --- Crowdin Errors ---

/// Errors reported by the Crowdin workflow itself (as opposed to transport).
#[derive(Debug, Error)]
pub enum CrowdinError {
    /// A build or report job ended in a terminal state other than `finished`.
    #[error("{job} {id} ended with status '{status}'")]
    JobFailed {
        job: &'static str,
        id: String,
        status: String,
    },
}

// --- Archive Errors ---

/// Translation archive errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Error from the zip reader.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Entry path escapes the staging directory.
    #[error("unsafe entry path: {0}")]
    UnsafePath(String),

    /// Entry content could not be read.
    #[error("failed to read entry '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
