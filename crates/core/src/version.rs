//! Version stamp from the last upstream commit touching the font stylesheet.

use chrono::DateTime;
use log::{debug, error};
use serde::Deserialize;

use crate::{config::UpdateConfig, error::Result, fetch::Fetch};

/// Commit id used in the version string when no metadata was available.
pub const UNKNOWN_COMMIT: &str = "undefined";

/// The most recent commit of the tracked stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    /// Author date as reported by the API (RFC 3339).
    pub date: String,
}

impl CommitInfo {
    pub fn short_sha(&self) -> &str {
        self.sha.char_indices().nth(7).map_or(self.sha.as_str(), |(end, _)| &self.sha[..end])
    }

    /// `YYYY-MM-DD` of the author date.
    pub fn short_date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.date) {
            Ok(date) => date.format("%Y-%m-%d").to_string(),
            Err(_) => self.date.chars().take(10).collect(),
        }
    }
}

#[derive(Deserialize)]
struct CommitEntry {
    sha: String,
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    author: CommitAuthor,
}

#[derive(Deserialize)]
struct CommitAuthor {
    date: String,
}

/// Parse a commit listing, newest first. `Ok(None)` for an empty listing.
pub fn parse_commits(body: &str) -> Result<Option<CommitInfo>> {
    let entries: Vec<CommitEntry> = serde_json::from_str(body)?;
    Ok(entries
        .into_iter()
        .next()
        .map(|entry| CommitInfo { sha: entry.sha, date: entry.commit.author.date }))
}

/// Fetch the latest commit of the font stylesheet.
///
/// Never fails: a fetch error or unexpected response yields `None`.
pub fn latest_commit(fetcher: &impl Fetch, config: &UpdateConfig) -> Option<CommitInfo> {
    let url = config.commits_url();
    let body = match fetcher.fetch(&url) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed loading {url}: {e}");
            return None;
        }
    };

    match parse_commits(&body) {
        Ok(info) => info,
        Err(e) => {
            debug!("No commit metadata from {url}: {e}");
            None
        }
    }
}

/// Version string for the theme: the upstream commit page.
pub fn version_url(config: &UpdateConfig, info: Option<&CommitInfo>) -> String {
    config.commit_page_url(info.map_or(UNKNOWN_COMMIT, |info| info.sha.as_str()))
}
