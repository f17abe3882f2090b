//! Scraper configuration
//!
//! Built once at startup and handed to [`crate::OctanimeScraper`]. The
//! defaults are the fixed production values.

use std::time::Duration;

use crate::client::ClientConfig;
use crate::url::BASE_URL;

/// Configuration for the high-level scraper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Site root used to build search URLs (default: https://www.octanime.tv)
    pub base_url: String,
    /// Wall-clock budget for a paginated search (default: 10s)
    pub search_budget: Duration,
    /// Wall-clock budget for an episode batch (default: 30s)
    pub extract_budget: Duration,
    /// Outbound HTTP client settings
    pub client: ClientConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            search_budget: Duration::from_secs(10),
            extract_budget: Duration::from_secs(30),
            client: ClientConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Default configuration pointed at a different site root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
