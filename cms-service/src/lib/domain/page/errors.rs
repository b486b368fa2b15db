use thiserror::Error;

use crate::domain::page::models::PageId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for CustomUrl validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomUrlError {
    #[error("Custom URL is empty")]
    Empty,

    #[error("Custom URL must start with '/'")]
    MissingLeadingSlash,

    #[error("Custom URL must not contain whitespace")]
    ContainsWhitespace,

    #[error("Custom URL too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageContentError {
    #[error("Page content is empty")]
    Empty,
}

/// Top-level error type for custom page operations
#[derive(Debug, Clone, Error)]
pub enum PageError {
    #[error("Invalid page ID: {0}")]
    InvalidPageId(#[from] PageIdError),

    #[error("Invalid custom URL: {0}")]
    InvalidUrl(#[from] CustomUrlError),

    #[error("Invalid page content: {0}")]
    InvalidContent(#[from] PageContentError),

    #[error("Page not found: {0}")]
    NotFound(PageId),

    #[error("Custom URL already exists: {0}")]
    UrlAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        PageError::Unknown(err.to_string())
    }
}
