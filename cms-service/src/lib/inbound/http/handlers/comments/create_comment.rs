use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CommentResponseData;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentBody;
use crate::domain::comment::models::CommenterName;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::news::models::NewsId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Comments are public; no authentication required.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(news_id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<ApiSuccess<CommentResponseData>, ApiError> {
    let news_id = NewsId::from_string(&news_id).map_err(CommentError::from)?;
    let Json(body) = payload?;

    state
        .comment_service
        .create_comment(news_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    name: String,
    comment: String,
}

impl CreateCommentRequest {
    fn try_into_command(self) -> Result<CreateCommentCommand, CommentError> {
        Ok(CreateCommentCommand {
            name: CommenterName::new(self.name)?,
            comment: CommentBody::new(self.comment)?,
        })
    }
}
