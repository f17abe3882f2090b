//! Error types for the HTTP layer
//!
//! Maps scraper failures onto status codes with a `{"error": ...}` body.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use octanime_core::OctanimeError;
use serde_json::json;
use thiserror::Error;

use crate::json_response;

/// Request-level failure returned by a handler
#[derive(Debug)]
pub struct ApiError(pub OctanimeError);

impl From<OctanimeError> for ApiError {
    fn from(error: OctanimeError) -> Self {
        Self(error)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error
    pub fn status(&self) -> StatusCode {
        match self.0 {
            OctanimeError::EmptyQuery | OctanimeError::EmptyUrl => StatusCode::BAD_REQUEST,
            OctanimeError::NoEpisodes => StatusCode::NOT_FOUND,
            OctanimeError::FetchFailed(_) | OctanimeError::HttpError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        json_response(status, &json!({ "error": self.0 }))
    }
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bind address could not be parsed
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError(OctanimeError::EmptyQuery).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(OctanimeError::EmptyUrl).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(OctanimeError::NoEpisodes).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError(OctanimeError::FetchFailed("http://x".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_config_error_display() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let error = ConfigError::InvalidBindAddr {
            value: "nope".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid bind address \"nope\""));
    }
}
