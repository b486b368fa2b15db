use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::news::errors::NewsError;
use crate::domain::news::models::NewsId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_news(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let news_id = NewsId::from_string(&news_id).map_err(NewsError::from)?;

    state
        .news_service
        .delete_news(news_id)
        .await
        .map_err(ApiError::from)
        .map(|()| StatusCode::NO_CONTENT)
}
