// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Crowdin API v2 payloads.
//!
//! Every response wraps its payload in `{"data": ...}`; list responses wrap
//! each item a second time.
//!
//! | Type               | Endpoint                                  |
//! |--------------------|-------------------------------------------|
//! | `Project`          | `GET projects/{id}`                       |
//! | `Member`           | `GET projects/{id}/members`               |
//! | `Build`            | `translations/builds[/{id}]`              |
//! | `ReportHandle`     | `reports[/{id}]`                          |
//! | `DownloadLink`     | `.../download`                            |
//! | `TopMembersReport` | signed report URL (not wrapped)           |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::poll::JobStatus;

/// `{"data": T}` envelope around every API payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Project details; only the target languages are used.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub target_language_ids: Vec<String>,
}

/// Project member as listed by `members?role=...`.
#[derive(Debug, Deserialize)]
pub struct Member {
    pub id: u64,
}

/// A translation build: the server-side job producing the archive.
#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    pub id: u64,
    pub status: JobStatus,
}

/// A report generation job.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportHandle {
    pub identifier: String,
    pub status: JobStatus,
}

/// Short-lived signed URL returned by download endpoints.
#[derive(Debug, Deserialize)]
pub struct DownloadLink {
    pub url: String,
}

/// Body of `POST translations/builds`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub skip_untranslated_strings: bool,
}

/// Body of `POST reports`.
#[derive(Debug, Serialize)]
pub struct ReportRequest<'a> {
    pub name: &'a str,
    pub schema: TopMembersSchema<'a>,
}

/// Schema of the `top-members` report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMembersSchema<'a> {
    pub unit: &'a str,
    pub format: &'a str,
    pub date_from: &'a str,
    pub date_to: &'a str,
    pub language_id: &'a str,
}

/// Downloaded `top-members` report for one language.
#[derive(Debug, Clone, Deserialize)]
pub struct TopMembersReport {
    pub language: ReportLanguage,
    #[serde(default)]
    pub data: Vec<TopMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportLanguage {
    pub id: String,
    pub name: String,
}

/// One row of a `top-members` report.
#[derive(Debug, Clone, Deserialize)]
pub struct TopMember {
    pub user: ReportUser,
    #[serde(default)]
    pub translated: u64,
    #[serde(default)]
    pub approved: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUser {
    pub id: UserId,
    pub full_name: String,
    #[serde(default)]
    pub username: String,
}

/// User id as found in reports: a decimal string, sometimes a plain number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl UserId {
    /// Numeric value, or `None` for ids that are not decimal numbers.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(id) => id.trim().parse().ok(),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}
