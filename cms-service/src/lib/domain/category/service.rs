use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::CategoryError;
use super::models::Category;
use super::models::CategoryId;
use super::models::CreateCategoryCommand;
use super::models::UpdateCategoryCommand;
use super::ports::CategoryRepository;
use super::ports::CategoryServicePort;

/// Concrete implementation of CategoryServicePort.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    category_repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(category_repository: Arc<CR>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository + 'static,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let now = Utc::now();
        let category = Category {
            id: CategoryId::new(),
            name: command.name,
            created_at: now,
            updated_at: now,
        };

        let created = self.category_repository.create(category).await?;
        tracing::info!(category_id = %created.id, name = %created.name, "Category created");

        Ok(created)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.category_repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.category_repository.find_all().await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let mut category = self.get_category(id).await?;

        category.name = command.name;
        category.updated_at = Utc::now();

        self.category_repository.update(category).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError> {
        self.category_repository.delete(id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
