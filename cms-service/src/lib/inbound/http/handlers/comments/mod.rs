pub mod create_comment;
pub mod list_comments;

pub use create_comment::create_comment;
pub use list_comments::list_comments;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::comment::models::Comment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponseData {
    pub id: String,
    pub news_id: String,
    pub name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponseData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            news_id: comment.news_id.to_string(),
            name: comment.name.as_str().to_string(),
            comment: comment.comment.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}
