use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::UpdateCategoryCommand;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a new category.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another category uses this name
    /// * `DatabaseError` - Database operation failed
    async fn create_category(&self, command: CreateCategoryCommand)
        -> Result<Category, CategoryError>;

    /// Retrieve a category by ID.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError>;

    /// List all categories, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Rename a category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `NameAlreadyExists` - Another category uses this name
    /// * `DatabaseError` - Database operation failed
    async fn update_category(
        &self,
        id: CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Delete a category and, through the schema, its news.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Unique name constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, category: Category) -> Result<Category, CategoryError>;

    /// Retrieve a category by ID, None if absent.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve all categories ordered by creation time.
    async fn find_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Persist changes to an existing category.
    ///
    /// # Errors
    /// * `NotFound` - No row with this ID
    /// * `NameAlreadyExists` - Unique name constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, category: Category) -> Result<Category, CategoryError>;

    /// Remove a category.
    ///
    /// # Errors
    /// * `NotFound` - No row with this ID
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
}
