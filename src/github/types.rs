// GitHub API response types.
// REST and GraphQL payloads as received, plus the normalized shapes served to clients.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

// ---- REST payloads ----

/// `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryDetails {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    pub language: Option<String>,
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub name: String,
}

// ---- GraphQL payloads ----

/// `data` of the contributions query.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionsData {
    pub user: Option<ContributionsUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    pub contributions_collection: ContributionsCollection,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

/// One calendar week. Served to clients exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryConnection {
    #[serde(default)]
    pub nodes: Vec<Option<RepositoryNode>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub primary_language: Option<PrimaryLanguage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryLanguage {
    pub name: String,
    pub color: Option<String>,
}

// ---- Normalized output ----

/// Merged GitHub profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUserStats {
    pub username: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter: Option<String>,
    pub repos: u64,
    pub stars: u64,
    pub followers: u64,
    pub following: u64,
    pub total_contributions: u64,
    pub contribution_calendar: Vec<ContributionWeek>,
    pub languages: Vec<LanguageStat>,
    pub top_repos: Vec<TopRepo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Number of repositories using a language as primary language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub count: u64,
    pub color: String,
}

/// Compact repository summary for the top-repositories list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRepo {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Repository summary.
///
/// `commit_count` and `contributor_count` are the lengths of single
/// 100-item pages, so they cap at 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubRepoStats {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub language: Option<String>,
    pub license: Option<String>,
    pub topics: Vec<String>,
    pub commit_count: usize,
    pub contributor_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Read the `x-ratelimit-*` headers. Absent or malformed headers stay `None`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        Self {
            limit: read("x-ratelimit-limit"),
            remaining: read("x-ratelimit-remaining"),
            reset: read("x-ratelimit-reset"),
        }
    }

    /// True when the upstream reported no requests left in the window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Reset time as `HH:MM:SS` UTC.
    pub fn reset_at(&self) -> String {
        self.reset
            .and_then(|reset| DateTime::from_timestamp(reset as i64, 0))
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
