use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::PageRequest;
use super::PageResponseData;
use crate::domain::page::models::CreatePageCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_page(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<PageRequest>, JsonRejection>,
) -> Result<ApiSuccess<PageResponseData>, ApiError> {
    let Json(body) = payload?;
    let (custom_url, content) = body.try_into_parts()?;

    state
        .page_service
        .create_page(CreatePageCommand { custom_url, content }, user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::CREATED, page.into()))
}
