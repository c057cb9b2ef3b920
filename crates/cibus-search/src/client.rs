//! HTTP client for the vendor search endpoint.
//!
//! Issues `GET {base}/search?q=<query>` and decodes the JSON body into a
//! [`SearchResult`]. Every failure (transport, timeout, non-2xx, a
//! `"status": "failure"` envelope, or a malformed body) comes back as a typed
//! [`SearchError`]. Nothing is retried.

use std::time::Duration;

use cibus_core::{AppConfig, SearchResult};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SearchError;

const SEARCH_PATH: &str = "search";

/// Status/message fields the search service adds next to (or instead of) the
/// result payload.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: Option<String>,
    msg: Option<String>,
}

impl StatusEnvelope {
    fn failure_message(&self) -> Option<String> {
        (self.status.as_deref() == Some("failure"))
            .then(|| self.msg.clone().unwrap_or_else(|| "search failed".to_owned()))
    }
}

/// Client for the vendor search endpoint.
///
/// Use [`SearchClient::new`] with an explicit base URL (a wiremock server in
/// tests) or [`SearchClient::from_config`] for the configured service.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidBaseUrl`] if `base_url` is not an http(s) URL.
    /// - [`SearchError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        // A single trailing slash makes `join` append to the base path instead
        // of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| SearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        let endpoint = base.join(SEARCH_PATH).map_err(|e| invalid(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client from the shared application config.
    ///
    /// # Errors
    ///
    /// See [`SearchClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        Self::new(
            &config.search_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Runs one search and returns the decoded result.
    ///
    /// An empty `trucks` array is a successful, empty result.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or timeout.
    /// - [`SearchError::Rejected`] if the service reports `"status": "failure"`.
    /// - [`SearchError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`SearchError::Deserialize`] if the body does not match the expected shape.
    pub async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(query, %url, "issuing search request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Some(msg) = Self::failure_message(&body) {
                return Err(SearchError::Rejected(msg));
            }
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        if let Some(msg) = Self::failure_message_from_value(&value) {
            return Err(SearchError::Rejected(msg));
        }

        let result: SearchResult =
            serde_json::from_value(value).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        tracing::info!(
            query,
            hits = result.hits,
            locations = result.locations,
            "search completed"
        );
        Ok(result)
    }

    /// Builds the request URL with `query` percent-encoded as `q`.
    #[must_use]
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    fn failure_message(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| Self::failure_message_from_value(&value))
    }

    fn failure_message_from_value(value: &serde_json::Value) -> Option<String> {
        if !value.is_object() {
            return None;
        }
        StatusEnvelope::deserialize(value)
            .ok()
            .and_then(|envelope| envelope.failure_message())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
