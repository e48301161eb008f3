// GitHub API HTTP client.
// Handles per-request authentication, rate limit reporting, and response checking.

use reqwest::{
    Client, Response, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Result, StatsError};
use crate::upstream::{self, GraphQlRequest, GraphQlResponse};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub REST + GraphQL client.
///
/// Holds no credentials: every call takes the caller's token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: Url,
    graphql_url: String,
}

impl GitHubClient {
    /// Create a client against the given REST base and GraphQL endpoint.
    pub fn new(api_base: impl Into<String>, graphql_url: impl Into<String>) -> Result<Self> {
        let api_base = api_base.into();
        let api_base = Url::parse(&api_base).map_err(|err| {
            StatsError::Other(format!("Invalid GitHub API URL {}: {}", api_base, err))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(StatsError::Other(format!(
                "Invalid GitHub API URL {}",
                api_base
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("devstats"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(StatsError::Transport)?;

        Ok(Self {
            client,
            api_base,
            graphql_url: graphql_url.into(),
        })
    }

    /// REST URL for the given path segments. Each segment is percent-encoded,
    /// so a `/`, `?` or `#` inside a username stays within its segment.
    pub fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request to the REST API.
    pub async fn get(&self, token: &str, segments: &[&str]) -> Result<Response> {
        self.get_with_params(token, segments, &[] as &[(&str, &str)])
            .await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: Serialize + ?Sized>(
        &self,
        token: &str,
        segments: &[&str],
        params: &T,
    ) -> Result<Response> {
        let response = self
            .client
            .get(self.endpoint_url(segments))
            .bearer_auth(token)
            .query(params)
            .send()
            .await
            .map_err(StatsError::Transport)?;

        check_response(response).await
    }

    /// Run a GraphQL query and return its `data` payload.
    pub async fn graphql<V, T>(&self, token: &str, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(StatsError::Transport)?;

        let envelope: GraphQlResponse<T> = check_response(response).await?.json().await?;
        envelope.into_data()
    }
}

/// Check response status and convert errors.
///
/// Failures carry the upstream's JSON `message` when the body has one.
async fn check_response(response: Response) -> Result<Response> {
    let rate_limit = RateLimit::from_headers(response.headers());
    tracing::debug!(
        url = %response.url(),
        status = response.status().as_u16(),
        limit = ?rate_limit.limit,
        remaining = ?rate_limit.remaining,
        "github response"
    );

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = upstream::error_message(&body);

    match status {
        StatusCode::UNAUTHORIZED => Err(StatsError::Unauthorized(
            message.unwrap_or_else(|| "Authentication failed: invalid or expired token".to_string()),
        )),
        StatusCode::NOT_FOUND => Err(StatsError::NotFound(
            message.unwrap_or_else(|| format!("Resource not found: {}", path)),
        )),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limit.is_exhausted() => {
            Err(StatsError::RateLimited {
                reset_at: rate_limit.reset_at(),
            })
        }
        status => Err(StatsError::Http {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| format!("HTTP {}: {}", status, body)),
        }),
    }
}
