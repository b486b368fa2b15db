pub mod create_page;
pub mod delete_page;
pub mod get_page;
pub mod list_pages;
pub mod update_page;

pub use create_page::create_page;
pub use delete_page::delete_page;
pub use get_page::get_page;
pub use list_pages::list_pages;
pub use update_page::update_page;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::page::errors::PageError;
use crate::domain::page::models::CustomPage;
use crate::domain::page::models::CustomUrl;
use crate::domain::page::models::PageContent;

/// HTTP request body shared by page create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    custom_url: String,
    content: String,
}

impl PageRequest {
    fn try_into_parts(self) -> Result<(CustomUrl, PageContent), PageError> {
        Ok((CustomUrl::new(self.custom_url)?, PageContent::new(self.content)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResponseData {
    pub id: String,
    pub custom_url: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CustomPage> for PageResponseData {
    fn from(page: &CustomPage) -> Self {
        Self {
            id: page.id.to_string(),
            custom_url: page.custom_url.as_str().to_string(),
            content: page.content.as_str().to_string(),
            author_id: page.author_id.to_string(),
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}
