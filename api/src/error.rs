//! Unified error types for the Folio API
//!
//! This module defines error types for each layer:
//! - `FeedError`: Service-level errors surfaced by the two fetch operations
//! - `GitHubError`: GitHub API client errors
//! - `AppError`: HTTP layer errors (wraps service errors for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the article and activity services.
///
/// An empty feed is not an error; services return `Ok(vec![])` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Transport failure or non-success HTTP status
    #[error("Network error: {0}")]
    Network(String),

    /// Well-formed response that reports failure (e.g. proxy status != "ok")
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The caller signalled cancellation before the fetch completed
    #[error("Fetch cancelled")]
    Cancelled,
}

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<GitHubError> for FeedError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::Deserialization(msg) => FeedError::Upstream(msg),
            other => FeedError::Network(other.to_string()),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Feed(#[from] FeedError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Feed(FeedError::Cancelled) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Shutting down",
                None,
            ),
            AppError::Feed(e @ (FeedError::Network(_) | FeedError::Upstream(_))) => {
                tracing::error!("Feed error: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream feed error", Some(e.to_string()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
