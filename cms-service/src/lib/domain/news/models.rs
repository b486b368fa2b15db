use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::category::models::CategoryId;
use crate::domain::news::errors::NewsContentError;
use crate::domain::news::errors::NewsIdError;
use crate::domain::news::errors::NewsTitleError;
use crate::domain::user::models::UserId;

/// News article entity.
#[derive(Debug, Clone)]
pub struct News {
    pub id: NewsId,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub title: NewsTitle,
    pub content: NewsContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// News unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsId(pub Uuid);

impl NewsId {
    /// Generate a new random news ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a news ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, NewsIdError> {
        Uuid::parse_str(s)
            .map(NewsId)
            .map_err(|e| NewsIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for NewsId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Headline of a news article, trimmed, 1-255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTitle(String);

impl NewsTitle {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title exceeds 255 characters
    pub fn new(title: String) -> Result<Self, NewsTitleError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(NewsTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NewsTitleError::TooLong {
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

/// Body of a news article. Stored verbatim, must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsContent(String);

impl NewsContent {
    /// # Errors
    /// * `Empty` - Content is blank
    pub fn new(content: String) -> Result<Self, NewsContentError> {
        if content.trim().is_empty() {
            return Err(NewsContentError::Empty);
        }
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to publish a news article.
#[derive(Debug, Clone)]
pub struct CreateNewsCommand {
    pub category_id: CategoryId,
    pub title: NewsTitle,
    pub content: NewsContent,
}

/// Command replacing every editable field of a news article.
#[derive(Debug, Clone)]
pub struct UpdateNewsCommand {
    pub category_id: CategoryId,
    pub title: NewsTitle,
    pub content: NewsContent,
}
