pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::create_category;
pub use delete_category::delete_category;
pub use get_category::get_category;
pub use list_categories::list_categories;
pub use update_category::update_category;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::category::models::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponseData {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryResponseData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.as_str().to_string(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
