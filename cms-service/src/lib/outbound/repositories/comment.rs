use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentBody;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommenterName;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::news::models::NewsId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: &PgRow) -> Result<Comment, CommentError> {
        let map_err = |e: sqlx::Error| CommentError::DatabaseError(e.to_string());

        Ok(Comment {
            id: CommentId(row.try_get("id").map_err(map_err)?),
            news_id: NewsId(row.try_get("news_id").map_err(map_err)?),
            name: CommenterName::new(row.try_get("name").map_err(map_err)?)?,
            comment: CommentBody::new(row.try_get("comment").map_err(map_err)?)?,
            created_at: row.try_get("created_at").map_err(map_err)?,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, news_id, name, comment, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.news_id.0)
        .bind(comment.name.as_str())
        .bind(comment.comment.as_str())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // News deleted between the existence check and the insert
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return CommentError::NewsNotFound(comment.news_id);
                }
            }
            CommentError::DatabaseError(e.to_string())
        })?;

        Ok(comment)
    }

    async fn find_by_news(&self, news_id: NewsId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, news_id, name, comment, created_at
            FROM comments
            WHERE news_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(news_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_comment).collect()
    }
}
