//! HTTP client for octanime.tv
//!
//! Provides the [`PageFetcher`] seam used by the crawl loops and its
//! reqwest-backed implementation. One GET per call, no retries.

use std::future::Future;
use std::time::Duration;

use crate::error::{OctanimeError, Result};

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Source of raw page bodies
///
/// A failed fetch means "no data" to every caller in this crate; none of
/// them treat it as fatal.
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url` as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP client wrapper sending a fixed desktop-browser User-Agent
pub struct OctanimeClient {
    client: reqwest::Client,
}

impl OctanimeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(OctanimeError::HttpError)?;

        Ok(Self { client })
    }

    /// Perform a single GET, rejecting non-2xx statuses
    async fn do_fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(OctanimeError::HttpError)?
            .error_for_status()
            .map_err(OctanimeError::HttpError)?;

        response.text().await.map_err(OctanimeError::HttpError)
    }
}

impl PageFetcher for OctanimeClient {
    /// Fetch HTML content from an absolute URL
    ///
    /// # Errors
    /// - `HttpError` - network failure, timeout, or non-2xx status
    async fn fetch(&self, url: &str) -> Result<String> {
        match self.do_fetch(url).await {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Error fetching page");
                Err(e)
            }
        }
    }
}
