use axum::extract::State;
use axum::http::StatusCode;

use super::NewsResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_news(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<NewsResponseData>>, ApiError> {
    state
        .news_service
        .list_news()
        .await
        .map_err(ApiError::from)
        .map(|news| {
            ApiSuccess::new(
                StatusCode::OK,
                news.iter().map(NewsResponseData::from).collect(),
            )
        })
}
