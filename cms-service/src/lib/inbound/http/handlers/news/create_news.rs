use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::NewsRequest;
use super::NewsResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_news(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<NewsRequest>, JsonRejection>,
) -> Result<ApiSuccess<NewsResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .news_service
        .create_news(body.try_into_create_command()?, user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref news| ApiSuccess::new(StatusCode::CREATED, news.into()))
}
