use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::PageResponseData;
use crate::domain::page::errors::PageError;
use crate::domain::page::models::PageId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> Result<ApiSuccess<PageResponseData>, ApiError> {
    let page_id = PageId::from_string(&page_id).map_err(PageError::from)?;

    state
        .page_service
        .get_page(page_id)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}
