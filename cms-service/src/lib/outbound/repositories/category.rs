use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::ports::CategoryRepository;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &PgRow) -> Result<Category, CategoryError> {
        let map_err = |e: sqlx::Error| CategoryError::DatabaseError(e.to_string());

        Ok(Category {
            id: CategoryId(row.try_get("id").map_err(map_err)?),
            name: CategoryName::new(row.try_get("name").map_err(map_err)?)?,
            created_at: row.try_get("created_at").map_err(map_err)?,
            updated_at: row.try_get("updated_at").map_err(map_err)?,
        })
    }

    fn map_write_error(e: sqlx::Error, category: &Category) -> CategoryError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some("categories_name_key") {
                return CategoryError::NameAlreadyExists(category.name.as_str().to_string());
            }
        }
        CategoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, CategoryError> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(category.id.0)
        .bind(category.name.as_str())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &category))?;

        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_category).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn update(&self, category: Category) -> Result<Category, CategoryError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(category.id.0)
        .bind(category.name.as_str())
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &category))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(category.id));
        }

        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}
