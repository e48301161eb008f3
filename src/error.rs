// Error types for devstats.
// Covers upstream transport and HTTP failures, GraphQL errors, and request validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 401; holds the upstream's message, or a generic one when it sent none.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    /// Non-success status; `message` is the upstream's own error text when it sent one.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    GraphQl(String),

    #[error("{0} not found")]
    Missing(&'static str),

    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: Box<StatsError>,
    },

    #[error("{0}")]
    Other(String),
}

impl StatsError {
    /// Wrap an upstream failure with the name of the data being fetched.
    pub fn fetching(what: &'static str) -> impl FnOnce(StatsError) -> StatsError {
        move |source| StatsError::Fetch {
            what,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
