use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::PageError;
use super::models::CreatePageCommand;
use super::models::CustomPage;
use super::models::PageId;
use super::models::UpdatePageCommand;
use super::ports::PageRepository;
use super::ports::PageServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of PageServicePort.
pub struct PageService<PR>
where
    PR: PageRepository,
{
    repository: Arc<PR>,
}

impl<PR> PageService<PR>
where
    PR: PageRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PageServicePort for PageService<PR>
where
    PR: PageRepository + 'static,
{
    async fn create_page(
        &self,
        command: CreatePageCommand,
        author_id: UserId,
    ) -> Result<CustomPage, PageError> {
        let now = Utc::now();
        let page = CustomPage {
            id: PageId::new(),
            custom_url: command.custom_url,
            content: command.content,
            author_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(page).await?;
        tracing::info!(
            page_id = %created.id,
            custom_url = %created.custom_url,
            "Custom page created"
        );

        Ok(created)
    }

    async fn get_page(&self, id: PageId) -> Result<CustomPage, PageError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PageError::NotFound(id))
    }

    async fn list_pages(&self) -> Result<Vec<CustomPage>, PageError> {
        self.repository.find_all().await
    }

    async fn update_page(
        &self,
        id: PageId,
        command: UpdatePageCommand,
    ) -> Result<CustomPage, PageError> {
        let mut page = self.get_page(id).await?;

        page.custom_url = command.custom_url;
        page.content = command.content;
        page.updated_at = Utc::now();

        self.repository.update(page).await
    }

    async fn delete_page(&self, id: PageId) -> Result<(), PageError> {
        self.repository.delete(id).await?;
        tracing::info!(page_id = %id, "Custom page deleted");
        Ok(())
    }
}
