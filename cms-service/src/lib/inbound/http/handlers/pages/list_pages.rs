use axum::extract::State;
use axum::http::StatusCode;

use super::PageResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_pages(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PageResponseData>>, ApiError> {
    state
        .page_service
        .list_pages()
        .await
        .map_err(ApiError::from)
        .map(|pages| {
            ApiSuccess::new(
                StatusCode::OK,
                pages.iter().map(PageResponseData::from).collect(),
            )
        })
}
