pub mod create_news;
pub mod delete_news;
pub mod get_news;
pub mod list_news;
pub mod update_news;

pub use create_news::create_news;
pub use delete_news::delete_news;
pub use get_news::get_news;
pub use list_news::list_news;
pub use update_news::update_news;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::category::models::CategoryId;
use crate::domain::news::errors::NewsError;
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::models::News;
use crate::domain::news::models::NewsContent;
use crate::domain::news::models::NewsTitle;
use crate::domain::news::models::UpdateNewsCommand;

/// HTTP request body shared by news create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsRequest {
    category_id: String,
    title: String,
    content: String,
}

impl NewsRequest {
    fn try_into_parts(self) -> Result<(CategoryId, NewsTitle, NewsContent), NewsError> {
        Ok((
            CategoryId::from_string(&self.category_id)?,
            NewsTitle::new(self.title)?,
            NewsContent::new(self.content)?,
        ))
    }

    fn try_into_create_command(self) -> Result<CreateNewsCommand, NewsError> {
        let (category_id, title, content) = self.try_into_parts()?;
        Ok(CreateNewsCommand {
            category_id,
            title,
            content,
        })
    }

    fn try_into_update_command(self) -> Result<UpdateNewsCommand, NewsError> {
        let (category_id, title, content) = self.try_into_parts()?;
        Ok(UpdateNewsCommand {
            category_id,
            title,
            content,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsResponseData {
    pub id: String,
    pub category_id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&News> for NewsResponseData {
    fn from(news: &News) -> Self {
        Self {
            id: news.id.to_string(),
            category_id: news.category_id.to_string(),
            author_id: news.author_id.to_string(),
            title: news.title.as_str().to_string(),
            content: news.content.as_str().to_string(),
            created_at: news.created_at,
            updated_at: news.updated_at,
        }
    }
}
