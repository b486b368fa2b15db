use async_trait::async_trait;

use crate::domain::page::errors::PageError;
use crate::domain::page::models::CreatePageCommand;
use crate::domain::page::models::CustomPage;
use crate::domain::page::models::PageId;
use crate::domain::page::models::UpdatePageCommand;
use crate::domain::user::models::UserId;

/// Port for custom page domain service operations.
#[async_trait]
pub trait PageServicePort: Send + Sync + 'static {
    /// Create a page authored by `author_id`.
    ///
    /// # Errors
    /// * `UrlAlreadyExists` - Another page uses the same custom URL
    /// * `DatabaseError` - Database operation failed
    async fn create_page(
        &self,
        command: CreatePageCommand,
        author_id: UserId,
    ) -> Result<CustomPage, PageError>;

    /// # Errors
    /// * `NotFound` - Page does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_page(&self, id: PageId) -> Result<CustomPage, PageError>;

    /// List all pages, newest first.
    async fn list_pages(&self) -> Result<Vec<CustomPage>, PageError>;

    /// # Errors
    /// * `NotFound` - Page does not exist
    /// * `UrlAlreadyExists` - Another page uses the same custom URL
    /// * `DatabaseError` - Database operation failed
    async fn update_page(
        &self,
        id: PageId,
        command: UpdatePageCommand,
    ) -> Result<CustomPage, PageError>;

    /// # Errors
    /// * `NotFound` - Page does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_page(&self, id: PageId) -> Result<(), PageError>;
}

/// Persistence operations for custom pages.
#[async_trait]
pub trait PageRepository: Send + Sync + 'static {
    /// # Errors
    /// * `UrlAlreadyExists` - Custom URL is taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, page: CustomPage) -> Result<CustomPage, PageError>;

    async fn find_by_id(&self, id: PageId) -> Result<Option<CustomPage>, PageError>;

    /// Retrieve all pages, newest first.
    async fn find_all(&self) -> Result<Vec<CustomPage>, PageError>;

    /// # Errors
    /// * `NotFound` - Page does not exist
    /// * `UrlAlreadyExists` - Custom URL is taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, page: CustomPage) -> Result<CustomPage, PageError>;

    /// # Errors
    /// * `NotFound` - Page does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: PageId) -> Result<(), PageError>;
}
