//! Main scraper API for octanime.tv
//!
//! Provides the high-level API combining the HTTP client, parsers, and
//! crawl loops into the search and extract flows.

use crate::client::{OctanimeClient, PageFetcher};
use crate::config::ScraperConfig;
use crate::crawl::{crawl_pages, process_episodes};
use crate::error::{OctanimeError, Result};
use crate::parser::parse_episode_references;
use crate::types::{ExtractResponse, SearchResponse};
use crate::url::build_search_url;

/// Main scraper API for octanime.tv
///
/// Generic over the page source so the flows can run against stubs; the
/// default is the reqwest-backed [`OctanimeClient`].
pub struct OctanimeScraper<F = OctanimeClient> {
    fetcher: F,
    config: ScraperConfig,
}

impl OctanimeScraper<OctanimeClient> {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a new scraper with custom configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let fetcher = OctanimeClient::with_config(config.client.clone())?;
        Ok(Self { fetcher, config })
    }
}

impl<F: PageFetcher> OctanimeScraper<F> {
    /// Create a scraper around any page source
    pub fn with_fetcher(fetcher: F, config: ScraperConfig) -> Self {
        Self { fetcher, config }
    }

    /// Configuration this scraper was built with
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Search the site and crawl result pages within the search budget
    ///
    /// # Arguments
    /// * `query` - Search query string, echoed back unchanged
    ///
    /// # Returns
    /// Every card collected before the crawl stopped
    ///
    /// # Errors
    /// - `EmptyQuery` if query is empty
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> octanime_core::Result<()> {
    /// use octanime_core::OctanimeScraper;
    /// let scraper = OctanimeScraper::new()?;
    /// let response = scraper.search("naruto").await?;
    /// for card in response.results {
    ///     println!("{:?}: {:?}", card.title, card.detail_url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        if query.is_empty() {
            return Err(OctanimeError::EmptyQuery);
        }

        let search_url = build_search_url(&self.config.base_url, query);
        tracing::info!(query, url = %search_url, "Searching");

        let results = crawl_pages(&self.fetcher, &search_url, self.config.search_budget).await;

        Ok(SearchResponse {
            total_results: results.len(),
            results,
            search_query: query.to_string(),
        })
    }

    /// Fetch an anime page and collect servers for its episodes within the
    /// extract budget
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the anime's episode-list page
    ///
    /// # Errors
    /// - `EmptyUrl` if url is empty
    /// - `FetchFailed` if the episode-list page cannot be fetched or is empty
    /// - `NoEpisodes` if the page lists no episodes
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> octanime_core::Result<()> {
    /// use octanime_core::OctanimeScraper;
    /// let scraper = OctanimeScraper::new()?;
    /// let response = scraper.extract("https://www.octanime.tv/anime/naruto/").await?;
    /// println!("{} of {}", response.processed_episodes, response.total_episodes);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn extract(&self, url: &str) -> Result<ExtractResponse> {
        if url.is_empty() {
            return Err(OctanimeError::EmptyUrl);
        }

        let html = self
            .fetcher
            .fetch(url)
            .await
            .ok()
            .filter(|body| !body.is_empty())
            .ok_or_else(|| OctanimeError::FetchFailed(url.to_string()))?;

        let episodes = parse_episode_references(&html);
        if episodes.is_empty() {
            return Err(OctanimeError::NoEpisodes);
        }
        tracing::info!(url, episodes = episodes.len(), "Extracting episode servers");

        let results = process_episodes(&self.fetcher, &episodes, self.config.extract_budget).await;

        Ok(ExtractResponse {
            total_episodes: episodes.len(),
            processed_episodes: results.len(),
            results,
        })
    }
}
