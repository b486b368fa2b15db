use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::page::errors::PageError;
use crate::domain::page::models::CustomPage;
use crate::domain::page::models::CustomUrl;
use crate::domain::page::models::PageContent;
use crate::domain::page::models::PageId;
use crate::domain::page::ports::PageRepository;
use crate::domain::user::models::UserId;

pub struct PostgresPageRepository {
    pool: PgPool,
}

impl PostgresPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_page(row: &PgRow) -> Result<CustomPage, PageError> {
        let map_err = |e: sqlx::Error| PageError::DatabaseError(e.to_string());

        Ok(CustomPage {
            id: PageId(row.try_get("id").map_err(map_err)?),
            custom_url: CustomUrl::new(row.try_get("custom_url").map_err(map_err)?)?,
            content: PageContent::new(row.try_get("content").map_err(map_err)?)?,
            author_id: UserId(row.try_get("author_id").map_err(map_err)?),
            created_at: row.try_get("created_at").map_err(map_err)?,
            updated_at: row.try_get("updated_at").map_err(map_err)?,
        })
    }

    fn map_write_error(e: sqlx::Error, page: &CustomPage) -> PageError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation()
                && db_err.constraint() == Some("custom_pages_custom_url_key")
            {
                return PageError::UrlAlreadyExists(page.custom_url.as_str().to_string());
            }
        }
        PageError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PageRepository for PostgresPageRepository {
    async fn create(&self, page: CustomPage) -> Result<CustomPage, PageError> {
        sqlx::query(
            r#"
            INSERT INTO custom_pages (id, custom_url, content, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(page.id.0)
        .bind(page.custom_url.as_str())
        .bind(page.content.as_str())
        .bind(page.author_id.0)
        .bind(page.created_at)
        .bind(page.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &page))?;

        Ok(page)
    }

    async fn find_by_id(&self, id: PageId) -> Result<Option<CustomPage>, PageError> {
        let row = sqlx::query(
            r#"
            SELECT id, custom_url, content, author_id, created_at, updated_at
            FROM custom_pages
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PageError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_page).transpose()
    }

    async fn find_all(&self) -> Result<Vec<CustomPage>, PageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, custom_url, content, author_id, created_at, updated_at
            FROM custom_pages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PageError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_page).collect()
    }

    async fn update(&self, page: CustomPage) -> Result<CustomPage, PageError> {
        let result = sqlx::query(
            r#"
            UPDATE custom_pages
            SET custom_url = $2, content = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(page.id.0)
        .bind(page.custom_url.as_str())
        .bind(page.content.as_str())
        .bind(page.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &page))?;

        if result.rows_affected() == 0 {
            return Err(PageError::NotFound(page.id));
        }

        Ok(page)
    }

    async fn delete(&self, id: PageId) -> Result<(), PageError> {
        let result = sqlx::query(
            r#"
            DELETE FROM custom_pages
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PageError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PageError::NotFound(id));
        }

        Ok(())
    }
}
