use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::comment::errors::CommentBodyError;
use crate::domain::comment::errors::CommenterNameError;
use crate::domain::news::models::NewsId;

/// Public reader comment attached to a news article.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub news_id: NewsId,
    pub name: CommenterName,
    pub comment: CommentBody,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name supplied by the commenter, trimmed, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommenterName(String);

impl CommenterName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, CommenterNameError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(CommenterNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CommenterNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment text, non-blank, at most 2000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    const MAX_LENGTH: usize = 2000;

    pub fn new(body: String) -> Result<Self, CommentBodyError> {
        if body.trim().is_empty() {
            return Err(CommentBodyError::Empty);
        }

        let length = body.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CommentBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(body))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to post a comment.
#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub name: CommenterName,
    pub comment: CommentBody,
}
