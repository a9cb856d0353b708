//! HTTP handlers
//!
//! Axum request handlers for the section endpoints.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

pub mod activity;
pub mod blog;

pub use activity::get_activity;
pub use blog::get_blog;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Respond with `body` as JSON or with its rendered `text`.
/// Unavailable sections are served as 502.
fn section_response<T: Serialize>(
    headers: &HeaderMap,
    unavailable: bool,
    body: &T,
    text: String,
) -> Response {
    let status = if unavailable {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    if wants_json(headers) {
        (status, Json(body)).into_response()
    } else {
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response()
    }
}
