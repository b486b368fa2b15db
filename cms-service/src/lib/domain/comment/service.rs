use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::CommentError;
use super::models::Comment;
use super::models::CommentId;
use super::models::CreateCommentCommand;
use super::ports::CommentRepository;
use super::ports::CommentServicePort;
use crate::domain::news::models::NewsId;
use crate::domain::news::ports::NewsRepository;

/// Concrete implementation of CommentServicePort.
pub struct CommentService<CR, NR>
where
    CR: CommentRepository,
    NR: NewsRepository,
{
    comment_repository: Arc<CR>,
    news_repository: Arc<NR>,
}

impl<CR, NR> CommentService<CR, NR>
where
    CR: CommentRepository,
    NR: NewsRepository,
{
    /// # Arguments
    /// * `comment_repository` - Comment persistence implementation
    /// * `news_repository` - News repository for validation
    pub fn new(comment_repository: Arc<CR>, news_repository: Arc<NR>) -> Self {
        Self {
            comment_repository,
            news_repository,
        }
    }

    async fn ensure_news_exists(&self, news_id: NewsId) -> Result<(), CommentError> {
        self.news_repository
            .find_by_id(news_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?
            .ok_or(CommentError::NewsNotFound(news_id))?;
        Ok(())
    }
}

#[async_trait]
impl<CR, NR> CommentServicePort for CommentService<CR, NR>
where
    CR: CommentRepository + 'static,
    NR: NewsRepository + 'static,
{
    async fn create_comment(
        &self,
        news_id: NewsId,
        command: CreateCommentCommand,
    ) -> Result<Comment, CommentError> {
        self.ensure_news_exists(news_id).await?;

        let comment = Comment {
            id: CommentId::new(),
            news_id,
            name: command.name,
            comment: command.comment,
            created_at: Utc::now(),
        };

        let created = self.comment_repository.create(comment).await?;
        tracing::debug!(comment_id = %created.id, news_id = %news_id, "Comment posted");

        Ok(created)
    }

    async fn list_comments(&self, news_id: NewsId) -> Result<Vec<Comment>, CommentError> {
        self.ensure_news_exists(news_id).await?;
        self.comment_repository.find_by_news(news_id).await
    }
}
