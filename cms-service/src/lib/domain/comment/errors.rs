use thiserror::Error;

use crate::domain::news::errors::NewsIdError;
use crate::domain::news::models::NewsId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommenterNameError {
    #[error("Commenter name is empty")]
    Empty,

    #[error("Commenter name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentBodyError {
    #[error("Comment is empty")]
    Empty,

    #[error("Comment too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid commenter name: {0}")]
    InvalidName(#[from] CommenterNameError),

    #[error("Invalid comment: {0}")]
    InvalidComment(#[from] CommentBodyError),

    #[error("Invalid news ID: {0}")]
    InvalidNewsId(#[from] NewsIdError),

    #[error("News not found: {0}")]
    NewsNotFound(NewsId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
