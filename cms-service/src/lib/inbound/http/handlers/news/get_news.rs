use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::NewsResponseData;
use crate::domain::news::errors::NewsError;
use crate::domain::news::models::NewsId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> Result<ApiSuccess<NewsResponseData>, ApiError> {
    let news_id = NewsId::from_string(&news_id).map_err(NewsError::from)?;

    state
        .news_service
        .get_news(news_id)
        .await
        .map_err(ApiError::from)
        .map(|ref news| ApiSuccess::new(StatusCode::OK, news.into()))
}
