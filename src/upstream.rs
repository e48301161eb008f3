// Shared upstream wire helpers.
// GraphQL request/response envelopes and error-message extraction for provider bodies.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// Take the `data` payload. Fails with the first error message when there is no data.
    pub fn into_data(self) -> Result<T> {
        if let Some(data) = self.data {
            return Ok(data);
        }

        let message = self
            .errors
            .and_then(|errors| errors.into_iter().next())
            .map(|error| error.message)
            .unwrap_or_else(|| "GraphQL response contained no data".to_string());
        Err(StatsError::GraphQl(message))
    }
}

/// Error body shapes sent by the providers: REST `{message}` or GraphQL `{errors: [{message}]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<GraphQlError>>,
}

/// Pull a human-readable error message out of a provider's error body.
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.or_else(|| {
        parsed
            .errors
            .and_then(|errors| errors.into_iter().next())
            .map(|error| error.message)
    })
}
