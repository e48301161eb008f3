// Operation handlers.
// Validates request parameters and runs each operation through the response cache.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::cache::{keys, with_cache};
use crate::error::{Result, StatsError};
use crate::state::AppState;

use super::registry::Operation;

/// Query parameters forwarded to an operation.
pub type Params = HashMap<String, String>;

/// Fetch a required, non-empty parameter.
fn require<'a>(params: &'a Params, name: &'static str) -> Result<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(StatsError::MissingParam(name))
}

/// Serve `key` from the cache, or run `fetch` and cache its serialized result.
async fn cached<T, F, Fut>(state: &AppState, key: String, ttl: Duration, fetch: F) -> Result<Value>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    with_cache(&state.cache, &key, ttl, move || async move {
        let value = fetch().await?;
        Ok::<_, StatsError>(serde_json::to_value(value)?)
    })
    .await
}

impl Operation {
    /// Run the operation. Parameters are checked before any network call.
    pub async fn invoke(self, state: &AppState, params: &Params) -> Result<Value> {
        let ttl = self.ttl();
        match self {
            Operation::GitHubStats => {
                let username = require(params, "username")?;
                let token = require(params, "token")?;
                cached(state, keys::github_user_key(username), ttl, || {
                    state.github.user_stats(token, username)
                })
                .await
            }
            Operation::GitHubRepo => {
                let owner = require(params, "owner")?;
                let repo = require(params, "repo")?;
                let token = require(params, "token")?;
                cached(state, keys::github_repo_key(owner, repo), ttl, || {
                    state.github.repo_stats(token, owner, repo)
                })
                .await
            }
            Operation::LeetCodeStats => {
                let username = require(params, "username")?;
                cached(state, keys::leetcode_user_key(username), ttl, || {
                    state.leetcode.user_stats(username)
                })
                .await
            }
            Operation::LeetCodeProblem => {
                let title_slug = require(params, "titleSlug")?;
                cached(state, keys::leetcode_problem_key(title_slug), ttl, || {
                    state.leetcode.problem_stats(title_slug)
                })
                .await
            }
        }
    }
}
