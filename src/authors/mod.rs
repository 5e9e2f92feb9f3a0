// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `AUTHORS` credits file.
//!
//! ```text
//! HEADER
//! Contributors:            <-- git shortlog --all -sn --no-merges
//!  <name>                      (commit count order, automation excluded)
//! Translators:             <-- top-members reports, one per language
//!  <language>:                 (languages sorted by name)
//!   <member>                   (report order; removed, blocked and
//!                               inactive members excluded)
//! ```


use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::Config;
use crate::crowdin::CrowdinClient;
use crate::crowdin::models::{TopMember, TopMembersReport};
use crate::error::Result;
use crate::git::backend::GitRunner;
use crate::git::cmd;

/// Fixed preamble of the credits file.
pub const HEADER: &str = "Original Author: Hugh Bailey (\"Jim\")\n\nContributors are sorted by their amount of commits / translated strings.\n\n";

/// Display name Crowdin uses for deleted accounts.
pub const REMOVED_USER: &str = "REMOVED_USER";

/// Contributor names from `git shortlog -sn` output, in the given order.
///
/// The name is the text after the first tab. Empty lines and `exclude` are dropped.
#[must_use]
pub fn parse_shortlog(shortlog: &str, exclude: &str) -> Vec<String> {
    shortlog
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_once('\t').map_or(line, |(_, name)| name))
        .filter(|name| *name != exclude)
        .map(str::to_string)
        .collect()
}

/// Translators of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCredits {
    pub language: String,
    pub members: Vec<String>,
}

fn is_credited(member: &TopMember, blocked: &BTreeSet<u64>) -> bool {
    if member.user.full_name == REMOVED_USER {
        return false;
    }
    if member.user.id.as_u64().is_some_and(|id| blocked.contains(&id)) {
        return false;
    }
    member.translated != 0 || member.approved != 0
}

/// Group credited members by language name and sort the languages.
///
/// Reports that share a language name are merged in report order.
#[must_use]
pub fn collect_translators(
    reports: &[TopMembersReport],
    blocked: &BTreeSet<u64>,
) -> Vec<LanguageCredits> {
    let mut credits: Vec<LanguageCredits> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for report in reports {
        let slot = *index.entry(report.language.name.as_str()).or_insert_with(|| {
            credits.push(LanguageCredits {
                language: report.language.name.clone(),
                members: Vec::new(),
            });
            credits.len() - 1
        });
        credits[slot].members.extend(
            report
                .data
                .iter()
                .filter(|member| is_credited(member, blocked))
                .map(|member| member.user.full_name.clone()),
        );
    }

    credits.sort_by(|a, b| {
        a.language
            .to_lowercase()
            .cmp(&b.language.to_lowercase())
            .then_with(|| a.language.cmp(&b.language))
    });
    credits
}

/// Full text of the credits file.
#[must_use]
pub fn render_authors(contributors: &[String], translators: &[LanguageCredits]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("Contributors:\n");
    for name in contributors {
        out.push(' ');
        out.push_str(name);
        out.push('\n');
    }
    out.push_str("Translators:\n");
    for credits in translators {
        out.push(' ');
        out.push_str(&credits.language);
        out.push_str(":\n");
        for member in &credits.members {
            out.push_str("  ");
            out.push_str(member);
            out.push('\n');
        }
    }
    out
}

/// Overwrite the credits file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn write_authors(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Contributor names from the repository history, automation excluded.
///
/// # Errors
///
/// Returns an error if `git shortlog` fails.
pub fn read_contributors(runner: &dyn GitRunner, config: &Config) -> Result<Vec<String>> {
    let shortlog = cmd::shortlog(runner, &config.repo.root).context("failed to read contributors")?;
    let contributors = parse_shortlog(&shortlog, &config.committer.name);
    debug!(contributors = contributors.len(), "parsed git shortlog");
    Ok(contributors)
}

/// Fetch translator statistics and write the credits file.
///
/// # Errors
///
/// Returns an error if any Crowdin request or report fails, or the file
/// cannot be written.
pub async fn write_credits(
    client: &CrowdinClient,
    config: &Config,
    contributors: &[String],
) -> Result<()> {
    let (blocked, reports) = tokio::try_join!(client.blocked_members(), client.top_members_reports())
        .context("failed to fetch translator statistics")?;
    let translators = collect_translators(&reports, &blocked);

    let path = config.repo_path(&config.repo.authors_file);
    write_authors(&path, &render_authors(contributors, &translators)).await?;
    info!(
        path = %path.display(),
        contributors = contributors.len(),
        languages = translators.len(),
        "wrote credits"
    );
    Ok(())
}

/// Regenerate the credits file from git history and Crowdin reports.
///
/// # Errors
///
/// Returns an error if the history cannot be read, any Crowdin request or
/// report fails, or the file cannot be written.
pub async fn generate_credits(
    runner: &dyn GitRunner,
    client: &CrowdinClient,
    config: &Config,
) -> Result<()> {
    let contributors = read_contributors(runner, config)?;
    write_credits(client, config, &contributors).await
}
