use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::news::models::NewsId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Post a comment on a news article.
    ///
    /// # Errors
    /// * `NewsNotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        news_id: NewsId,
        command: CreateCommentCommand,
    ) -> Result<Comment, CommentError>;

    /// List comments of a news article, oldest first.
    ///
    /// # Errors
    /// * `NewsNotFound` - Article does not exist
    /// * `DatabaseError` - Database operation failed
    async fn list_comments(&self, news_id: NewsId) -> Result<Vec<Comment>, CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist a new comment.
    ///
    /// # Errors
    /// * `NewsNotFound` - News foreign key violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    /// Retrieve the comments of an article ordered by creation time.
    async fn find_by_news(&self, news_id: NewsId) -> Result<Vec<Comment>, CommentError>;
}
