//! Error types for the octanime scraper
//!
//! Request-level failures only. Markup that does not match the expected
//! structure is never an error; extractors return empty results instead.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all octanime scraper operations
///
/// The `Display` strings double as the JSON error messages returned by the
/// HTTP API, so they must stay stable.
#[derive(Error, Debug)]
pub enum OctanimeError {
    /// Network failure, timeout, or non-2xx status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The page a request was built around could not be fetched
    #[error("Failed to fetch the page: {0}")]
    FetchFailed(String),

    /// The episode-list page contained no episode links
    #[error("No episodes found on the page")]
    NoEpisodes,

    /// Search was called without a query
    #[error("No search query provided")]
    EmptyQuery,

    /// Extract was called without a URL
    #[error("No URL provided")]
    EmptyUrl,
}

impl Serialize for OctanimeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for octanime operations
pub type Result<T> = std::result::Result<T, OctanimeError>;
