//! HTTP handlers for the octanime API
//!
//! Query strings are read as ordered pairs. A repeated key resolves to its
//! first value, and a missing key reads as an empty string so the scraper
//! can reject it with its own error message.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::ApiError;
use crate::{AppState, json_response};

type QueryPairs = Vec<(String, String)>;

/// First value for `key`, or `""` when the key is absent
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

/// Search for anime across result pages
///
/// `GET /api/search?q=<text>`
pub async fn search_anime(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let response = state.scraper.search(first_param(&params, "q")).await?;
    Ok(json_response(StatusCode::OK, &response))
}

/// Collect streaming servers for every episode of an anime page
///
/// `GET /api/extract?url=<text>`
pub async fn extract_episodes(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let response = state.scraper.extract(first_param(&params, "url")).await?;
    Ok(json_response(StatusCode::OK, &response))
}
