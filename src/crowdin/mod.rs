// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Crowdin API v2 client.
//!
//! ```text
//! CrowdinClient (bearer token, project id)
//!   |
//!   +-- acquire_build(reuse) --> latest finished build, or POST + poll
//!   |       '-- download_translations(id) --> signed URL --> zip bytes
//!   |
//!   +-- top_members_reports()
//!           target languages --> one future per language
//!           POST report --> poll --> signed URL --> TopMembersReport
//!           joined with try_join_all: one failure fails all
//! ```
//!
//! # Key Types
//!
//! | Type               | Purpose                                 |
//! |--------------------|-----------------------------------------|
//! | `CrowdinClient`    | Authenticated calls for one project     |
//! | `Sleeper`          | Delay between status checks             |
//! | `JobStatus`        | Server-side status of a build or report |
//! | `TopMembersReport` | Per-language contributor statistics     |

pub mod models;
pub mod poll;


use bon::Builder;
use futures_util::future::try_join_all;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::types::CrowdinConfig;
use crate::error::{NetworkError, SyncResult};
use crate::net::{Downloader, ProgressDisplay, global_client};

use models::{
    Build, BuildRequest, DownloadLink, Envelope, Member, Project, ReportHandle, ReportRequest,
    TopMembersReport, TopMembersSchema,
};
pub use poll::{JobState, JobStatus, Sleeper, TokioSleeper, poll_until_finished};

/// Authenticated client bound to one Crowdin project.
#[derive(Clone, Builder)]
pub struct CrowdinClient {
    #[builder(into)]
    base_url: String,
    #[builder(into)]
    token: String,
    project_id: u64,
    #[builder(setters(name = with_poll_interval), default = Duration::from_secs(3))]
    poll_interval: Duration,
    #[builder(setters(name = with_sleeper), default = Arc::new(TokioSleeper) as Arc<dyn Sleeper>)]
    sleeper: Arc<dyn Sleeper>,
    #[builder(setters(name = with_members_limit), default = 500)]
    members_limit: u32,
    #[builder(setters(name = with_report_range), default = default_report_range())]
    report_range: (String, String),
    #[builder(setters(name = with_progress), default)]
    progress: ProgressDisplay,
    #[builder(setters(name = with_http), default = global_client().clone())]
    http: Client,
}

fn default_report_range() -> (String, String) {
    let defaults = CrowdinConfig::default();
    (defaults.report_date_from, defaults.report_date_to)
}

impl CrowdinClient {
    /// Client for the configured project, with a real timer and a progress bar
    /// for the archive download.
    #[must_use]
    pub fn from_config(config: &CrowdinConfig, token: &str) -> Self {
        Self::builder()
            .base_url(config.api_url.trim_end_matches('/'))
            .token(token)
            .project_id(config.project_id)
            .with_poll_interval(config.poll_interval())
            .with_members_limit(config.members_limit)
            .with_report_range((
                config.report_date_from.clone(),
                config.report_date_to.clone(),
            ))
            .with_progress(ProgressDisplay::Bar)
            .build()
    }

    #[must_use]
    pub const fn project_id(&self) -> u64 {
        self.project_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}/projects/{}{path}", self.base_url, self.project_id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, url: String, request: RequestBuilder) -> SyncResult<T> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: format!("{url} (error: {body})"),
            }
            .into());
        }

        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(|e| NetworkError::InvalidResponse {
                url,
                message: e.to_string(),
            })?;
        Ok(envelope.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let request = self.http.get(&url);
        self.send(url, request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> SyncResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        let request = self.http.post(&url).json(body);
        self.send(url, request).await
    }

    /// Language ids the project is translated into.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn target_languages(&self) -> SyncResult<Vec<String>> {
        let project: Project = self.get("").await?;
        Ok(project.target_language_ids)
    }

    /// Ids of members with the `blocked` role.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn blocked_members(&self) -> SyncResult<BTreeSet<u64>> {
        let members: Vec<Envelope<Member>> = self
            .get(&format!("/members?role=blocked&limit={}", self.members_limit))
            .await?;
        Ok(members.into_iter().map(|m| m.data.id).collect())
    }

    /// Most recent build, if the project has any.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn latest_build(&self) -> SyncResult<Option<Build>> {
        let builds: Vec<Envelope<Build>> = self
            .get("/translations/builds?limit=1")
            .await?;
        Ok(builds.into_iter().next().map(|b| b.data))
    }

    /// Start a build that skips untranslated strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn create_build(&self) -> SyncResult<Build> {
        self.post(
            "/translations/builds",
            &BuildRequest {
                skip_untranslated_strings: true,
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn build_status(&self, build_id: u64) -> SyncResult<JobStatus> {
        let build: Build = self
            .get(&format!("/translations/builds/{build_id}"))
            .await?;
        Ok(build.status)
    }

    /// Id of a finished build.
    ///
    /// With `reuse`, the latest build is taken when it is already `finished`.
    /// Otherwise a new build is started and polled until it finishes.
    ///
    /// # Errors
    ///
    /// Returns an error on any failed request or when the build fails.
    pub async fn acquire_build(&self, reuse: bool) -> SyncResult<u64> {
        if reuse {
            match self.latest_build().await? {
                Some(build) if build.status == JobStatus::Finished => {
                    info!(build = build.id, "reusing finished build");
                    return Ok(build.id);
                }
                Some(build) => {
                    debug!(build = build.id, status = %build.status, "latest build not reusable");
                }
                None => debug!("project has no builds yet"),
            }
        }

        let build = self.create_build().await?;
        info!(build = build.id, status = %build.status, "started translation build");
        let id = build.id.to_string();
        poll_until_finished(
            "build",
            &id,
            build.status,
            self.sleeper.as_ref(),
            self.poll_interval,
            || self.build_status(build.id),
        )
        .await?;
        Ok(build.id)
    }

    /// Download the archive of a finished build.
    ///
    /// # Errors
    ///
    /// Returns an error if the link cannot be resolved or the download fails.
    pub async fn download_translations(&self, build_id: u64) -> SyncResult<Vec<u8>> {
        let link: DownloadLink = self
            .get(&format!("/translations/builds/{build_id}/download"))
            .await?;
        info!(build = build_id, "downloading translations archive");
        Downloader::new()
            .url(link.url)
            .progress(self.progress)
            .download_bytes()
            .await
    }

    /// Request a `top-members` report for one language.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn generate_report(&self, language_id: &str) -> SyncResult<ReportHandle> {
        let (date_from, date_to) = &self.report_range;
        self.post(
            "/reports",
            &ReportRequest {
                name: "top-members",
                schema: TopMembersSchema {
                    unit: "strings",
                    format: "json",
                    date_from,
                    date_to,
                    language_id,
                },
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn report_status(&self, report_id: &str) -> SyncResult<JobStatus> {
        let report: ReportHandle = self.get(&format!("/reports/{report_id}")).await?;
        Ok(report.status)
    }

    /// # Errors
    ///
    /// Returns an error if the link cannot be resolved or the report is not valid JSON.
    pub async fn download_report(&self, report_id: &str) -> SyncResult<TopMembersReport> {
        let link: DownloadLink = self
            .get(&format!("/reports/{report_id}/download"))
            .await?;
        Downloader::new().url(link.url).silent().download_json().await
    }

    /// Generate, await and download the report of one language.
    ///
    /// # Errors
    ///
    /// Returns an error on any failed request or when the report job fails.
    pub async fn top_members_report(&self, language_id: &str) -> SyncResult<TopMembersReport> {
        let handle = self.generate_report(language_id).await?;
        debug!(language = language_id, report = %handle.identifier, "requested report");
        poll_until_finished(
            "report",
            &handle.identifier,
            handle.status,
            self.sleeper.as_ref(),
            self.poll_interval,
            || self.report_status(&handle.identifier),
        )
        .await?;
        self.download_report(&handle.identifier).await
    }

    /// Reports for every target language, fetched concurrently.
    ///
    /// The result follows the order of the project's target languages.
    ///
    /// # Errors
    ///
    /// Fails as soon as any single report fails.
    pub async fn top_members_reports(&self) -> SyncResult<Vec<TopMembersReport>> {
        let languages = self.target_languages().await?;
        info!(languages = languages.len(), "generating top-members reports");
        try_join_all(
            languages
                .iter()
                .map(|language| self.top_members_report(language)),
        )
        .await
    }
}
