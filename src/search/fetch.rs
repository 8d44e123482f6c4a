// src/search/fetch.rs
// =============================================================================
// This module fetches the search engine's result page for a query.
//
// Strategy:
// - The endpoint is a fixed base URL that ends in the query parameter
//   (e.g. "...&text="), so the escaped query is simply appended
// - One GET, no retries; any transport error or non-2xx status is a
//   fetch failure for the whole request
// - The body is returned as raw bytes; turning it into a document is the
//   extractor's job
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::form_urlencoded;

use super::error::SearchError;

/// Source of result pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, SearchError>;
}

/// Appends the URL-escaped query to the endpoint
pub fn query_url(endpoint: &str, query: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", endpoint, escaped)
}

/// Fetches result pages over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("serp-probe/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpPageFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, SearchError> {
        let fetch_error = |reason: String| SearchError::Fetch {
            url: url.to_string(),
            reason,
        };

        debug!(%url, "fetching result page");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;

        Ok(body.to_vec())
    }
}
