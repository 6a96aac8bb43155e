/// Odds Feed Client
///
/// HTTP client for the odds REST server. Every call returns `FeedError` on
/// transport, status or decode failures; callers decide whether to keep
/// whatever catalog they already hold.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::catalog::{Event, Sport, SportSummary};
use crate::error::FeedError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default timeout for feed requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default feed URL (the mock server on its default port)
pub const DEFAULT_FEED_URL: &str = "http://localhost:3333";

// ============================================================================
// ODDS CLIENT
// ============================================================================

#[derive(Debug, Clone)]
pub struct OddsClient {
    base_url: String,
    client: Client,
}

impl OddsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        OddsClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Client for `ODDS_FEED_URL`, or the local mock server
    pub fn from_env() -> Self {
        let base_url = std::env::var("ODDS_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // EVENTS
    // ========================================================================

    pub async fn all_events(&self) -> Result<Vec<Event>, FeedError> {
        self.get_json("/events", &[]).await
    }

    pub async fn events_by_sport(&self, sport: Sport) -> Result<Vec<Event>, FeedError> {
        self.get_json("/events", &[("sport", sport.to_string())]).await
    }

    pub async fn live_events(&self) -> Result<Vec<Event>, FeedError> {
        self.get_json("/live", &[]).await
    }

    pub async fn upcoming_events(&self) -> Result<Vec<Event>, FeedError> {
        self.get_json("/upcoming", &[]).await
    }

    pub async fn featured_events(&self) -> Result<Vec<Event>, FeedError> {
        self.get_json("/featured", &[]).await
    }

    /// `Ok(None)` when the server has no such event
    pub async fn event(&self, id: u64) -> Result<Option<Event>, FeedError> {
        match self.get_json(&format!("/events/{}", id), &[]).await {
            Ok(event) => Ok(Some(event)),
            Err(FeedError::Status { status, .. }) if status == StatusCode::NOT_FOUND => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn sports(&self) -> Result<Vec<SportSummary>, FeedError> {
        self.get_json("/sports", &[]).await
    }

    /// One page of events; pages start at 1
    pub async fn events_page(&self, page: usize, limit: usize) -> Result<Vec<Event>, FeedError> {
        self.get_json(
            "/events",
            &[("_page", page.to_string()), ("_limit", limit.to_string())],
        )
        .await
    }

    /// Events whose teams, players, league or tournament contain `query`
    pub async fn search(&self, query: &str) -> Result<Vec<Event>, FeedError> {
        self.get_json("/events", &[("q", query.to_string())]).await
    }

    // ========================================================================
    // TRANSPORT
    // ========================================================================

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FeedError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "fetching odds");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                path: path.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for OddsClient {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = OddsClient::new("http://localhost:3333/");
        assert_eq!(client.base_url(), "http://localhost:3333");
    }
}
