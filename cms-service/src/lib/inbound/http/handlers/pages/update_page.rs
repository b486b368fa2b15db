use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::PageRequest;
use super::PageResponseData;
use crate::domain::page::errors::PageError;
use crate::domain::page::models::PageId;
use crate::domain::page::models::UpdatePageCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    payload: Result<Json<PageRequest>, JsonRejection>,
) -> Result<ApiSuccess<PageResponseData>, ApiError> {
    let page_id = PageId::from_string(&page_id).map_err(PageError::from)?;
    let Json(body) = payload?;
    let (custom_url, content) = body.try_into_parts()?;

    state
        .page_service
        .update_page(page_id, UpdatePageCommand { custom_url, content })
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}
