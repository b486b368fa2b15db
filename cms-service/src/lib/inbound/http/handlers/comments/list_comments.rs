use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::CommentResponseData;
use crate::domain::comment::errors::CommentError;
use crate::domain::news::models::NewsId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
) -> Result<ApiSuccess<Vec<CommentResponseData>>, ApiError> {
    let news_id = NewsId::from_string(&news_id).map_err(CommentError::from)?;

    state
        .comment_service
        .list_comments(news_id)
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            ApiSuccess::new(
                StatusCode::OK,
                comments.iter().map(CommentResponseData::from).collect(),
            )
        })
}
