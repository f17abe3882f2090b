//! Core data types for the octanime scraper
//!
//! Contains the extracted records and the two response payloads.
//! Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

/// One search-result tile from the anime listing
///
/// Every field is optional: a card whose poster or details region exists
/// but is missing an inner element is still emitted with `None` there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeCard {
    /// Poster image source
    pub image_url: Option<String>,

    /// Link to the anime's detail page
    #[serde(rename = "ani_url", alias = "detail_url")]
    pub detail_url: Option<String>,

    /// Type label (e.g., "TV", "Movie")
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Display title
    pub title: Option<String>,
}

/// A (name, URL) pair pointing at one episode's server page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeReference {
    pub display_name: String,
    pub url: String,
}

/// A named streaming server with its playback URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    pub url: String,
}

/// Servers discovered for one processed episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub episode_name: String,

    /// Possibly empty; an episode without servers is still reported
    pub servers: Vec<ServerEntry>,
}

/// Payload of a search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<AnimeCard>,
    pub total_results: usize,

    /// The query exactly as the caller sent it
    pub search_query: String,
}

/// Payload of an episode extraction request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Episodes found on the list page
    pub total_episodes: usize,

    /// Episodes processed before the budget ran out
    pub processed_episodes: usize,
    pub results: Vec<EpisodeResult>,
}
