// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Polling of long-running Crowdin jobs.
//!
//! ```text
//!            status          status != finished
//! Requested -------> Polling <-----------------+
//!     |                 |  sleep, check status |
//!     |                 +----------------------+
//!     | finished        | finished
//!     v                 v
//!           Finished
//!
//! failed / canceled from any state => CrowdinError::JobFailed
//! ```
//!
//! There is no attempt limit; a job that stays `inProgress` keeps the run waiting.

use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::error::{CrowdinError, SyncResult};

/// Status of a build or report job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    Created,
    InProgress,
    Finished,
    Failed,
    Canceled,
    /// A status this tool does not know; treated as still running.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::InProgress => "inProgress",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a polled job stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Creation request answered, status not yet inspected.
    Requested,
    /// Not finished yet; `polls` status checks done so far.
    Polling { polls: u32 },
    /// Done after `polls` status checks.
    Finished { polls: u32 },
}

impl JobState {
    /// Status checks performed to reach this state.
    #[must_use]
    pub const fn polls(self) -> u32 {
        match self {
            Self::Requested => 0,
            Self::Polling { polls } | Self::Finished { polls } => polls,
        }
    }

    /// Feed the latest observed status into the machine.
    ///
    /// # Errors
    ///
    /// Returns `CrowdinError::JobFailed` when the job reports `failed` or `canceled`.
    pub fn advance(self, job: &'static str, id: &str, status: JobStatus) -> SyncResult<Self> {
        let polls = self.polls();
        match (self, status) {
            (Self::Finished { .. }, _) => Ok(self),
            (_, JobStatus::Finished) => Ok(Self::Finished { polls }),
            (_, JobStatus::Failed | JobStatus::Canceled) => Err(CrowdinError::JobFailed {
                job,
                id: id.to_string(),
                status: status.to_string(),
            }
            .into()),
            (_, JobStatus::Unknown) => {
                warn!(job, id, "unrecognized job status, waiting");
                Ok(Self::Polling { polls })
            }
            (_, JobStatus::Created | JobStatus::InProgress) => Ok(Self::Polling { polls }),
        }
    }
}

/// Injectable delay between two status checks.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> BoxFuture<'_, ()>;
}

/// Real delay on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'_, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Poll `check` every `interval` until the job finishes.
///
/// `initial` is the status returned by the creation request. Returns the
/// number of status checks that were needed.
///
/// # Errors
///
/// Propagates errors from `check` and fails on `failed`/`canceled` statuses.
pub async fn poll_until_finished<F, Fut>(
    job: &'static str,
    id: &str,
    initial: JobStatus,
    sleeper: &dyn Sleeper,
    interval: Duration,
    mut check: F,
) -> SyncResult<u32>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SyncResult<JobStatus>>,
{
    let mut state = JobState::Requested.advance(job, id, initial)?;
    while let JobState::Polling { polls } = state {
        sleeper.sleep(interval).await;
        let status = check().await?;
        trace!(job, id, %status, "polled job status");
        state = JobState::Polling { polls: polls + 1 }.advance(job, id, status)?;
    }
    debug!(job, id, polls = state.polls(), "job finished");
    Ok(state.polls())
}
