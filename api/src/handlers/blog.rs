//! Blog handler
//!
//! The article list for the configured publishing handle, optionally
//! narrowed to one category.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;

use super::section_response;
use crate::app::{available_categories, filter_by_category};
use crate::domain::ports::{CodeHostClient, FeedProxyClient};
use crate::error::AppError;
use crate::feed::{render_blog, BlogSection, SectionView};
use crate::AppState;

/// Query parameters for GET /blog
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    /// Category to keep; "All" or absent keeps everything
    pub category: Option<String>,
}

/// GET /blog
///
/// Returns the blog section with the categories it can be narrowed to.
/// - Accept: application/json → JSON `BlogSection`
/// - Otherwise → Plain text (LLM-readable)
pub async fn get_blog<CH, FP>(
    State(state): State<AppState<CH, FP>>,
    Query(query): Query<BlogQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    CH: CodeHostClient + 'static,
    FP: FeedProxyClient + 'static,
{
    let category = query.category.as_deref();

    let result = state
        .article_service
        .fetch_articles(&state.config.medium_handle, &state.cancel)
        .await;

    if let Err(e) = &result {
        tracing::warn!("Blog section unavailable: {}", e);
    }

    let categories = match &result {
        Ok(articles) => available_categories(articles),
        Err(_) => available_categories(&[]),
    };
    let result = result.map(|articles| filter_by_category(articles, category));

    let section = BlogSection {
        categories,
        view: SectionView::from_result(result, &state.config.blog_profile_url())?,
    };
    let text = render_blog(&section, category);

    Ok(section_response(
        &headers,
        section.view.is_unavailable(),
        &section,
        text,
    ))
}
