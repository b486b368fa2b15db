use async_trait::async_trait;

use crate::domain::news::errors::NewsError;
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsId;
use crate::domain::news::models::UpdateNewsCommand;
use crate::domain::user::models::UserId;

/// Port for news domain service operations.
#[async_trait]
pub trait NewsServicePort: Send + Sync + 'static {
    /// Publish a news article authored by `author_id`.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_news(&self, command: CreateNewsCommand, author_id: UserId)
        -> Result<News, NewsError>;

    /// Retrieve a news article by ID.
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_news(&self, id: NewsId) -> Result<News, NewsError>;

    /// List all news articles, newest first.
    async fn list_news(&self) -> Result<Vec<News>, NewsError>;

    /// Replace category, title and content of an article.
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_news(&self, id: NewsId, command: UpdateNewsCommand) -> Result<News, NewsError>;

    /// Delete an article and its comments.
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_news(&self, id: NewsId) -> Result<(), NewsError>;
}

/// Persistence operations for news articles.
#[async_trait]
pub trait NewsRepository: Send + Sync + 'static {
    /// Persist a new article.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Category foreign key violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, news: News) -> Result<News, NewsError>;

    /// Retrieve an article by ID, None if absent.
    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsError>;

    /// Retrieve all articles, newest first.
    async fn find_all(&self) -> Result<Vec<News>, NewsError>;

    /// Persist changes to an existing article.
    ///
    /// # Errors
    /// * `NotFound` - No row with this ID
    /// * `CategoryNotFound` - Category foreign key violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, news: News) -> Result<News, NewsError>;

    /// Remove an article.
    ///
    /// # Errors
    /// * `NotFound` - No row with this ID
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: NewsId) -> Result<(), NewsError>;
}
