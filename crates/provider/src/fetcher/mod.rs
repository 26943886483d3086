//! HTTP transport seam.
//!
//! The provider core never talks to the network directly; it goes through the
//! [`HtmlFetcher`] trait so tests can serve canned pages and the host can
//! supply its own transport (cookies, rate limiting and retry policy all live
//! on that side of the seam).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Trait for fetching HTML document bodies.
#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    /// Fetch the body at `url` as UTF-8 text.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking-per-call fetcher backed by reqwest.
///
/// Holds a cookie store so the site session established by the host's login
/// request is carried across search and detail fetches.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the given request timeout.
    pub fn new(timeout_secs: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs as u64))
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

#[async_trait]
impl HtmlFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "Fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::ConnectionFailed(e.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            status: 503,
            url: "https://example.org/engine/search".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 503 from https://example.org/engine/search"
        );
    }

    #[test]
    fn test_http_fetcher_construction() {
        let _ = HttpFetcher::new(10);
    }
}
