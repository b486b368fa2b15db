use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::NewsRequest;
use super::NewsResponseData;
use crate::domain::news::errors::NewsError;
use crate::domain::news::models::NewsId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
    payload: Result<Json<NewsRequest>, JsonRejection>,
) -> Result<ApiSuccess<NewsResponseData>, ApiError> {
    let news_id = NewsId::from_string(&news_id).map_err(NewsError::from)?;
    let Json(body) = payload?;

    state
        .news_service
        .update_news(news_id, body.try_into_update_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref news| ApiSuccess::new(StatusCode::OK, news.into()))
}
