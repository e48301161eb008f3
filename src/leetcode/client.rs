// LeetCode GraphQL client.
// Posts queries to the public, unauthenticated GraphQL endpoint.

use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderValue, REFERER, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Result, StatsError};
use crate::upstream::{self, GraphQlRequest, GraphQlResponse};

use super::types::ProblemTotals;

pub const LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    client: Client,
    graphql_url: String,
    totals: ProblemTotals,
}

impl LeetCodeClient {
    /// Create a client against the given GraphQL endpoint.
    pub fn new(graphql_url: impl Into<String>, totals: ProblemTotals) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://leetcode.com"));
        headers.insert(USER_AGENT, HeaderValue::from_static("devstats"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(StatsError::Transport)?;

        Ok(Self {
            client,
            graphql_url: graphql_url.into(),
            totals,
        })
    }

    /// Reference problem counts reported alongside solved counts.
    pub fn totals(&self) -> ProblemTotals {
        self.totals
    }

    /// Run a query and return its `data` payload.
    pub async fn query<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.graphql_url)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(StatsError::Transport)?;

        let envelope: GraphQlResponse<T> = check_response(response).await?.json().await?;
        envelope.into_data()
    }
}

/// Convert non-success statuses, keeping the first GraphQL error message when present.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "leetcode request failed");
    let message = upstream::error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));
    Err(StatsError::Http {
        status: status.as_u16(),
        message,
    })
}
