//! Octanime HTTP API
//!
//! Exposes the octanime scraper as a JSON API.
//!
//! # Endpoints
//!
//! - `GET /api/search?q=<text>` - search results across pages
//! - `GET /api/extract?url=<text>` - streaming servers per episode
//!
//! # Usage
//!
//! ```no_run
//! use octanime_core::ScraperConfig;
//! use octanime_server::{AppState, router};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(ScraperConfig::default())?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, router(state)).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use octanime_core::{OctanimeScraper, ScraperConfig};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError};

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Shared handler state
///
/// The scraper is immutable after construction, so requests share it
/// without locking; every request owns its own accumulators.
#[derive(Clone)]
pub struct AppState {
    pub(crate) scraper: Arc<OctanimeScraper>,
}

impl AppState {
    /// Build state around a scraper with the given configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(config: ScraperConfig) -> octanime_core::Result<Self> {
        let scraper = OctanimeScraper::with_config(config)?;
        Ok(Self {
            scraper: Arc::new(scraper),
        })
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(routes::search_anime))
        .route("/api/extract", get(routes::extract_episodes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serialize `body` as UTF-8 JSON with non-ASCII text left unescaped
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
