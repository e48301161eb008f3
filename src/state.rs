// Shared application state.
// One cache instance and one client per upstream, created at startup and shared by all requests.

use serde_json::Value;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::leetcode::LeetCodeClient;

#[derive(Debug)]
pub struct AppState {
    /// Normalized responses, serialized, keyed per request signature.
    pub cache: TtlCache<Value>,
    pub github: GitHubClient,
    pub leetcode: LeetCodeClient,
}

impl AppState {
    pub fn new(github: GitHubClient, leetcode: LeetCodeClient) -> Self {
        Self {
            cache: TtlCache::new(),
            github,
            leetcode,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let github = GitHubClient::new(&config.github_api_url, &config.github_graphql_url)?;
        let leetcode = LeetCodeClient::new(&config.leetcode_graphql_url, config.problem_totals())?;
        Ok(Self::new(github, leetcode))
    }
}
