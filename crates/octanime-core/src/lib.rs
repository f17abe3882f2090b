//! Octanime Scraper Core Library
//!
//! Provides async API for searching anime and collecting streaming servers
//! from octanime.tv.
//!
//! # Overview
//!
//! This crate provides a complete scraping solution for octanime.tv with:
//! - A single-request HTTP client with a fixed browser User-Agent
//! - HTML parsers for anime cards, episode lists, and server lists
//! - Time-budgeted crawl loops that return partial results
//! - High-level API for the search and extract flows
//!
//! # Example
//!
//! ```no_run
//! use octanime_core::{OctanimeScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = OctanimeScraper::new()?;
//!
//!     // Search across result pages (10s budget)
//!     let search = scraper.search("naruto").await?;
//!     for card in &search.results {
//!         println!("{:?}: {:?}", card.title, card.detail_url);
//!     }
//!
//!     // Collect servers for every episode of a title (30s budget)
//!     if let Some(url) = search.results.first().and_then(|c| c.detail_url.as_deref()) {
//!         let extract = scraper.extract(url).await?;
//!         println!("{} of {} episodes", extract.processed_episodes, extract.total_episodes);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Budgets
//!
//! Budgets are checked between pages/episodes, never during a fetch. A
//! crawl that hits its budget returns what it has; it is not an error.

mod client;
mod config;
pub mod crawl;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, OctanimeClient, PageFetcher};

pub use config::ScraperConfig;

// Re-export error types
pub use error::{OctanimeError, Result};

// Re-export parser functions
pub use parser::{parse_anime_cards, parse_episode_references, parse_server_entries};

// Re-export crawl loops
pub use crawl::{crawl_pages, process_episodes};

// Re-export main scraper API
pub use scraper::OctanimeScraper;

// Re-export data types
pub use types::{
    AnimeCard, EpisodeReference, EpisodeResult, ExtractResponse, SearchResponse, ServerEntry,
};

// Re-export URL helper functions for convenience
pub use url::{build_page_url, build_search_url};
