// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network module with async downloads.
//!
//! ```text
//! Downloader::new()
//!   .url() .header()
//!   .progress() .silent()
//!        |
//!        +--------------+----------------+
//!        v              v                v
//!  download_bytes()  download_string()  download_json()
//!        |
//!        v
//!   Progress display
//!     Bar     [=====>     ] 5MB/10MB
//!     Spinner * 5MB @ 1MB/s
//!     Silent  (none)
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```
//!
//! Crowdin hands out pre-signed URLs for archives and reports, so these
//! downloads never carry the API token.

use crate::error::{NetworkError, SyncResult};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

/// Upper bound on buffer preallocation from an advertised `Content-Length`.
const MAX_PREALLOC: u64 = 64 * 1024 * 1024;

/// Initial body capacity; larger bodies still grow as chunks arrive.
fn initial_capacity(content_length: u64) -> usize {
    usize::try_from(content_length.min(MAX_PREALLOC)).unwrap_or(0)
}

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
pub(crate) fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!(
                "obs-translation-updater/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Pre-validated progress bar style for known sizes.
fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} @ {binary_bytes_per_sec} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

/// Pre-validated spinner style for unknown sizes.
fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {bytes} @ {binary_bytes_per_sec}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Progress display style for downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Show a visual progress bar with speed and ETA
    Bar,
    /// Show a spinner regardless of the announced size
    Spinner,
    /// No visual progress
    #[default]
    Silent,
}

/// Async HTTP downloader with builder pattern.
///
/// # Example
/// ```ignore
/// use obs_translation_updater::net::{Downloader, ProgressDisplay};
///
/// let bytes = Downloader::new()
///     .url("https://example.com/translations.zip")
///     .progress(ProgressDisplay::Bar)
///     .download_bytes()
///     .await?;
/// ```
pub struct Downloader {
    client: Client,
    url: Option<String>,
    headers: Vec<(String, String)>,
    progress_display: ProgressDisplay,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    /// Create a new downloader using the shared client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            headers: Vec::new(),
            progress_display: ProgressDisplay::default(),
        }
    }

    /// Set the URL to download from.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the progress display style.
    #[must_use]
    pub const fn progress(mut self, style: ProgressDisplay) -> Self {
        self.progress_display = style;
        self
    }

    /// Disable progress display.
    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress_display = ProgressDisplay::Silent;
        self
    }

    fn create_progress_bar(&self, total_size: u64) -> Option<ProgressBar> {
        match self.progress_display {
            ProgressDisplay::Silent => None,
            ProgressDisplay::Bar if total_size > 0 => {
                let pb = ProgressBar::new(total_size);
                pb.set_style(bar_style());
                Some(pb)
            }
            ProgressDisplay::Bar | ProgressDisplay::Spinner => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(spinner_style());
                Some(pb)
            }
        }
    }

    async fn send(&self) -> SyncResult<(String, Response)> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;

        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.clone(),
            }
            .into());
        }
        Ok((url.clone(), response))
    }

    /// Download the whole body into memory, streaming it through the progress display.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is configured, the request fails, the server
    /// answers with a non-success status, or the body stream breaks.
    pub async fn download_bytes(&self) -> SyncResult<Vec<u8>> {
        let (url, response) = self.send().await?;

        let total_size = response.content_length().unwrap_or(0);
        let progress_bar = self.create_progress_bar(total_size);
        let mut body = Vec::with_capacity(initial_capacity(total_size));

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| NetworkError::DownloadFailed {
                url: url.clone(),
                message: e.to_string(),
            })?;
            body.extend_from_slice(&chunk);

            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        Ok(body)
    }

    /// Download and return content as string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-success status code.
    pub async fn download_string(&self) -> SyncResult<String> {
        let (_, response) = self.send().await?;
        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        Ok(text)
    }

    /// Download and deserialize a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match `T`.
    pub async fn download_json<T: DeserializeOwned>(&self) -> SyncResult<T> {
        let (url, response) = self.send().await?;
        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        serde_json::from_str(&text).map_err(|e| {
            NetworkError::InvalidResponse {
                url,
                message: e.to_string(),
            }
            .into()
        })
    }
}
