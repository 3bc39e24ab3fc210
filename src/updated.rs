//! Repository update timestamp.
//!
//! A read-only call against the GitHub commits API retrieves when the
//! data repository last changed, for display in the page chrome. This is
//! cosmetic: a failure is logged by the caller and the slot is simply
//! left empty.

use crate::i18n::Locale;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    committer: Option<CommitSignature>,
}

#[derive(Debug, Deserialize)]
struct CommitSignature {
    date: DateTime<Utc>,
}

/// Fetch the timestamp of the most recent commit of `repo`
/// (`owner/name`). `api_base` is the API root, injectable for tests.
pub async fn fetch_last_updated(
    client: &reqwest::Client,
    api_base: &str,
    repo: &str,
) -> Result<DateTime<Utc>> {
    let url = format!("{}/repos/{}/commits", api_base.trim_end_matches('/'), repo);

    let response = client
        .get(&url)
        .query(&[("per_page", "1")])
        // GitHub rejects requests without a user agent
        .header(reqwest::header::USER_AGENT, "catalogue-viewer")
        .send()
        .await
        .context("Failed to send request to GitHub API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("GitHub API error ({}): {}", status, body);
    }

    let commits: Vec<CommitEntry> = response
        .json()
        .await
        .context("Failed to parse GitHub commits response")?;

    commits
        .into_iter()
        .next()
        .and_then(|entry| entry.commit.committer)
        .map(|signature| signature.date)
        .context("Repository has no commits")
}

/// The localized "last updated" line for the page chrome.
///
/// French typography puts a space before the colon.
pub fn last_updated_line(prefix: &str, date: DateTime<Utc>, locale: Locale) -> String {
    let separator = match locale {
        Locale::English => ": ",
        Locale::French => " : ",
    };
    format!("{}{}{}", prefix, separator, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // ==================== Response Format Tests ====================

    #[test]
    fn test_commits_response_shape() {
        let json = r#"[
            {
                "sha": "abc123",
                "commit": {
                    "message": "Refresh catalogue data",
                    "committer": {
                        "name": "maintainer",
                        "date": "2024-03-01T14:30:00Z"
                    }
                }
            }
        ]"#;

        let commits: Vec<CommitEntry> = serde_json::from_str(json).expect("deserialize");
        let date = commits[0].commit.committer.as_ref().expect("committer").date;
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_commits_response_missing_committer() {
        let json = r#"[{"commit": {"committer": null}}]"#;
        let commits: Vec<CommitEntry> = serde_json::from_str(json).expect("deserialize");
        assert!(commits[0].commit.committer.is_none());
    }

    // ==================== Display Tests ====================

    #[test]
    fn test_last_updated_line_english() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        assert_eq!(
            last_updated_line("Data last updated", date, Locale::English),
            "Data last updated: 2024-03-01"
        );
    }

    #[test]
    fn test_last_updated_line_french() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        assert_eq!(
            last_updated_line("Dernière mise à jour des données", date, Locale::French),
            "Dernière mise à jour des données : 2024-03-01"
        );
    }
}
