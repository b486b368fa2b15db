use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::page::errors::PageError;
use crate::domain::page::models::PageId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let page_id = PageId::from_string(&page_id).map_err(PageError::from)?;

    state
        .page_service
        .delete_page(page_id)
        .await
        .map_err(ApiError::from)
        .map(|()| StatusCode::NO_CONTENT)
}
