// GitHub API endpoint functions.
// Typed fetchers for the REST and GraphQL calls, and the aggregated stats operations.

use reqwest::StatusCode;
use serde::de::IgnoredAny;
use serde_json::json;

use crate::error::{Result, StatsError};

use super::client::GitHubClient;
use super::merge;
use super::types::{
    ContributionsData, GitHubRepoStats, GitHubUserStats, Repository, RepositoryDetails, User,
};

/// Page size for list endpoints. Only the first page is fetched.
pub const PER_PAGE: &str = "100";

const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
    repositories(first: 100, orderBy: {field: STARGAZERS, direction: DESC}) {
      nodes {
        name
        primaryLanguage {
          name
          color
        }
      }
    }
  }
}
"#;

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, token: &str, username: &str) -> Result<User> {
        let response = self.get(token, &["users", username]).await?;
        let user: User = response.json().await?;
        Ok(user)
    }

    /// Get a user's repositories, most recently updated first.
    pub async fn get_user_repos(&self, token: &str, username: &str) -> Result<Vec<Repository>> {
        let params = [("per_page", PER_PAGE), ("sort", "updated")];
        let response = self
            .get_with_params(token, &["users", username, "repos"], &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get the contribution calendar and repository languages via GraphQL.
    pub async fn get_contributions(&self, token: &str, username: &str) -> Result<ContributionsData> {
        self.graphql(token, CONTRIBUTIONS_QUERY, json!({ "username": username }))
            .await
    }

    /// Get a specific repository.
    pub async fn get_repo(&self, token: &str, owner: &str, repo: &str) -> Result<RepositoryDetails> {
        let response = self.get(token, &["repos", owner, repo]).await?;
        let repository: RepositoryDetails = response.json().await?;
        Ok(repository)
    }

    /// Count the first page of a list endpoint. An empty `204` response counts as zero.
    async fn count_first_page(&self, token: &str, segments: &[&str]) -> Result<usize> {
        let response = self
            .get_with_params(token, segments, &[("per_page", PER_PAGE)])
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(0);
        }
        let items: Vec<IgnoredAny> = response.json().await?;
        Ok(items.len())
    }

    /// Number of commits on the first page (at most 100).
    pub async fn count_commits(&self, token: &str, owner: &str, repo: &str) -> Result<usize> {
        self.count_first_page(token, &["repos", owner, repo, "commits"])
            .await
    }

    /// Number of contributors on the first page (at most 100).
    pub async fn count_contributors(&self, token: &str, owner: &str, repo: &str) -> Result<usize> {
        self.count_first_page(token, &["repos", owner, repo, "contributors"])
            .await
    }

    /// Aggregate profile: user, repositories, and contribution calendar.
    /// Any failing call fails the whole operation.
    pub async fn user_stats(&self, token: &str, username: &str) -> Result<GitHubUserStats> {
        let (user, repos, contributions) = tokio::try_join!(
            self.get_user(token, username),
            self.get_user_repos(token, username),
            self.get_contributions(token, username),
        )
        .map_err(StatsError::fetching("GitHub data"))?;

        tracing::debug!(username, repos = repos.len(), "merging github profile");
        Ok(merge::build_user_stats(user, &repos, contributions))
    }

    /// Repository summary from metadata plus first-page commit and contributor counts.
    pub async fn repo_stats(&self, token: &str, owner: &str, repo: &str) -> Result<GitHubRepoStats> {
        let (details, commits, contributors) = tokio::try_join!(
            self.get_repo(token, owner, repo),
            self.count_commits(token, owner, repo),
            self.count_contributors(token, owner, repo),
        )
        .map_err(StatsError::fetching("repository data"))?;

        Ok(merge::build_repo_stats(details, commits, contributors))
    }
}
