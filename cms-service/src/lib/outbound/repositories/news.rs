use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::category::models::CategoryId;
use crate::domain::news::errors::NewsError;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsContent;
use crate::domain::news::models::NewsId;
use crate::domain::news::models::NewsTitle;
use crate::domain::news::ports::NewsRepository;
use crate::domain::user::models::UserId;

pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_news(row: &PgRow) -> Result<News, NewsError> {
        let map_err = |e: sqlx::Error| NewsError::DatabaseError(e.to_string());

        Ok(News {
            id: NewsId(row.try_get("id").map_err(map_err)?),
            category_id: CategoryId(row.try_get("category_id").map_err(map_err)?),
            author_id: UserId(row.try_get("author_id").map_err(map_err)?),
            title: NewsTitle::new(row.try_get("title").map_err(map_err)?)?,
            content: NewsContent::new(row.try_get("content").map_err(map_err)?)?,
            created_at: row.try_get("created_at").map_err(map_err)?,
            updated_at: row.try_get("updated_at").map_err(map_err)?,
        })
    }

    fn map_write_error(e: sqlx::Error, news: &News) -> NewsError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation()
                && db_err.constraint() == Some("news_category_id_fkey")
            {
                return NewsError::CategoryNotFound(news.category_id);
            }
        }
        NewsError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn create(&self, news: News) -> Result<News, NewsError> {
        sqlx::query(
            r#"
            INSERT INTO news (id, category_id, author_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(news.id.0)
        .bind(news.category_id.0)
        .bind(news.author_id.0)
        .bind(news.title.as_str())
        .bind(news.content.as_str())
        .bind(news.created_at)
        .bind(news.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &news))?;

        Ok(news)
    }

    async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsError> {
        let row = sqlx::query(
            r#"
            SELECT id, category_id, author_id, title, content, created_at, updated_at
            FROM news
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| NewsError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_news).transpose()
    }

    async fn find_all(&self) -> Result<Vec<News>, NewsError> {
        let rows = sqlx::query(
            r#"
            SELECT id, category_id, author_id, title, content, created_at, updated_at
            FROM news
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| NewsError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_news).collect()
    }

    async fn update(&self, news: News) -> Result<News, NewsError> {
        let result = sqlx::query(
            r#"
            UPDATE news
            SET category_id = $2, title = $3, content = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(news.id.0)
        .bind(news.category_id.0)
        .bind(news.title.as_str())
        .bind(news.content.as_str())
        .bind(news.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &news))?;

        if result.rows_affected() == 0 {
            return Err(NewsError::NotFound(news.id));
        }

        Ok(news)
    }

    async fn delete(&self, id: NewsId) -> Result<(), NewsError> {
        let result = sqlx::query(
            r#"
            DELETE FROM news
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| NewsError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(NewsError::NotFound(id));
        }

        Ok(())
    }
}
