//! Activity handler

use axum::{extract::State, http::HeaderMap, response::Response};

use super::section_response;
use crate::domain::ports::{CodeHostClient, FeedProxyClient};
use crate::error::AppError;
use crate::feed::{render_activity, SectionView};
use crate::AppState;

/// GET /activity
///
/// Returns the recent-activity section. Sub-fetch failures are absorbed by
/// the service, so this is only unavailable when nothing could be built.
pub async fn get_activity<CH, FP>(
    State(state): State<AppState<CH, FP>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    CH: CodeHostClient + 'static,
    FP: FeedProxyClient + 'static,
{
    let result = state
        .activity_service
        .fetch_all_activity(&state.config.activity_handles(), &state.cancel)
        .await;

    let view = SectionView::from_result(result, &state.config.activity_profile_url())?;
    let text = render_activity(&view);

    Ok(section_response(&headers, view.is_unavailable(), &view, text))
}
