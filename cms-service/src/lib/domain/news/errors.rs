use thiserror::Error;

use crate::domain::category::errors::CategoryIdError;
use crate::domain::category::models::CategoryId;
use crate::domain::news::models::NewsId;

/// Error type for NewsId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for NewsTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsTitleError {
    #[error("News title is empty")]
    Empty,

    #[error("News title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for NewsContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsContentError {
    #[error("News content is empty")]
    Empty,
}

/// Top-level error type for all news operations
#[derive(Debug, Clone, Error)]
pub enum NewsError {
    #[error("Invalid news ID: {0}")]
    InvalidNewsId(#[from] NewsIdError),

    #[error("Invalid news title: {0}")]
    InvalidTitle(#[from] NewsTitleError),

    #[error("Invalid news content: {0}")]
    InvalidContent(#[from] NewsContentError),

    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    #[error("News not found: {0}")]
    NotFound(NewsId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for NewsError {
    fn from(err: anyhow::Error) -> Self {
        NewsError::Unknown(err.to_string())
    }
}
