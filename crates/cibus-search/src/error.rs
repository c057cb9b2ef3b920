use cibus_core::FailureKind;
use thiserror::Error;

/// Errors returned by the search endpoint client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status and no failure message.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The service answered with `"status": "failure"` and a message.
    #[error("search service rejected the query: {0}")]
    Rejected(String),

    /// The response body could not be deserialized into a search result.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl SearchError {
    /// Classifies the error for user-facing reporting.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            SearchError::Http(e) if e.is_decode() => FailureKind::ParseFailure,
            SearchError::Deserialize { .. } => FailureKind::ParseFailure,
            SearchError::Http(_)
            | SearchError::UnexpectedStatus { .. }
            | SearchError::Rejected(_)
            | SearchError::InvalidBaseUrl { .. } => FailureKind::FetchFailure,
        }
    }
}
