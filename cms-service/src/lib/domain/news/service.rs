use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::NewsError;
use super::models::CreateNewsCommand;
use super::models::News;
use super::models::NewsId;
use super::models::UpdateNewsCommand;
use super::ports::NewsRepository;
use super::ports::NewsServicePort;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::user::models::UserId;

/// Concrete implementation of NewsServicePort.
///
/// Checks the referenced category before writing an article.
pub struct NewsService<NR, CR>
where
    NR: NewsRepository,
    CR: CategoryRepository,
{
    news_repository: Arc<NR>,
    category_repository: Arc<CR>,
}

impl<NR, CR> NewsService<NR, CR>
where
    NR: NewsRepository,
    CR: CategoryRepository,
{
    /// Create a new news service with injected dependencies.
    ///
    /// # Arguments
    /// * `news_repository` - News persistence implementation
    /// * `category_repository` - Category repository for validation
    pub fn new(news_repository: Arc<NR>, category_repository: Arc<CR>) -> Self {
        Self {
            news_repository,
            category_repository,
        }
    }

    async fn ensure_category_exists(&self, category_id: CategoryId) -> Result<(), NewsError> {
        self.category_repository
            .find_by_id(category_id)
            .await
            .map_err(|e| NewsError::DatabaseError(e.to_string()))?
            .ok_or(NewsError::CategoryNotFound(category_id))?;
        Ok(())
    }
}

#[async_trait]
impl<NR, CR> NewsServicePort for NewsService<NR, CR>
where
    NR: NewsRepository + 'static,
    CR: CategoryRepository + 'static,
{
    async fn create_news(
        &self,
        command: CreateNewsCommand,
        author_id: UserId,
    ) -> Result<News, NewsError> {
        self.ensure_category_exists(command.category_id).await?;

        let now = Utc::now();
        let news = News {
            id: NewsId::new(),
            category_id: command.category_id,
            author_id,
            title: command.title,
            content: command.content,
            created_at: now,
            updated_at: now,
        };

        let created = self.news_repository.create(news).await?;
        tracing::info!(news_id = %created.id, author_id = %created.author_id, "News created");

        Ok(created)
    }

    async fn get_news(&self, id: NewsId) -> Result<News, NewsError> {
        self.news_repository
            .find_by_id(id)
            .await?
            .ok_or(NewsError::NotFound(id))
    }

    async fn list_news(&self) -> Result<Vec<News>, NewsError> {
        self.news_repository.find_all().await
    }

    async fn update_news(&self, id: NewsId, command: UpdateNewsCommand) -> Result<News, NewsError> {
        let mut news = self.get_news(id).await?;

        if news.category_id != command.category_id {
            self.ensure_category_exists(command.category_id).await?;
        }

        news.category_id = command.category_id;
        news.title = command.title;
        news.content = command.content;
        news.updated_at = Utc::now();

        self.news_repository.update(news).await
    }

    async fn delete_news(&self, id: NewsId) -> Result<(), NewsError> {
        self.news_repository.delete(id).await?;
        tracing::info!(news_id = %id, "News deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::category::errors::CategoryError;
    use crate::domain::category::models::Category;
    use crate::domain::category::models::CategoryName;
    use crate::domain::news::models::NewsContent;
    use crate::domain::news::models::NewsTitle;

    mock! {
        pub TestNewsRepository {}

        #[async_trait]
        impl NewsRepository for TestNewsRepository {
            async fn create(&self, news: News) -> Result<News, NewsError>;
            async fn find_by_id(&self, id: NewsId) -> Result<Option<News>, NewsError>;
            async fn find_all(&self) -> Result<Vec<News>, NewsError>;
            async fn update(&self, news: News) -> Result<News, NewsError>;
            async fn delete(&self, id: NewsId) -> Result<(), NewsError>;
        }
    }

    mock! {
        pub TestCategoryRepository {}

        #[async_trait]
        impl CategoryRepository for TestCategoryRepository {
            async fn create(&self, category: Category) -> Result<Category, CategoryError>;
            async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;
            async fn find_all(&self) -> Result<Vec<Category>, CategoryError>;
            async fn update(&self, category: Category) -> Result<Category, CategoryError>;
            async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
        }
    }

    fn category(id: CategoryId) -> Category {
        Category {
            id,
            name: CategoryName::new("Technology".to_string()).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn command(category_id: CategoryId) -> CreateNewsCommand {
        CreateNewsCommand {
            category_id,
            title: NewsTitle::new("Rust 2024 released".to_string()).unwrap(),
            content: NewsContent::new("The edition is out.".to_string()).unwrap(),
        }
    }

    fn existing_news(category_id: CategoryId) -> News {
        News {
            id: NewsId::new(),
            category_id,
            author_id: UserId::new(),
            title: NewsTitle::new("Old title".to_string()).unwrap(),
            content: NewsContent::new("Old content".to_string()).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_news_success() {
        let mut news_repository = MockTestNewsRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();
        let category_id = CategoryId::new();
        let author_id = UserId::new();

        category_repository
            .expect_find_by_id()
            .with(eq(category_id))
            .times(1)
            .returning(move |id| Ok(Some(category(id))));
        news_repository
            .expect_create()
            .withf(move |news| news.author_id == author_id && news.category_id == category_id)
            .times(1)
            .returning(|news| Ok(news));

        let service = NewsService::new(Arc::new(news_repository), Arc::new(category_repository));

        let news = service
            .create_news(command(category_id), author_id)
            .await
            .unwrap();

        assert_eq!(news.title.as_str(), "Rust 2024 released");
        assert_eq!(news.author_id, author_id);
    }

    #[tokio::test]
    async fn test_create_news_unknown_category() {
        let mut news_repository = MockTestNewsRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();
        let category_id = CategoryId::new();

        category_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        news_repository.expect_create().times(0);

        let service = NewsService::new(Arc::new(news_repository), Arc::new(category_repository));

        let result = service.create_news(command(category_id), UserId::new()).await;
        assert!(matches!(result, Err(NewsError::CategoryNotFound(id)) if id == category_id));
    }

    #[tokio::test]
    async fn test_get_news_not_found() {
        let mut news_repository = MockTestNewsRepository::new();
        news_repository.expect_find_by_id().returning(|_| Ok(None));

        let service = NewsService::new(
            Arc::new(news_repository),
            Arc::new(MockTestCategoryRepository::new()),
        );

        let result = service.get_news(NewsId::new()).await;
        assert!(matches!(result, Err(NewsError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_news_same_category_skips_lookup() {
        let mut news_repository = MockTestNewsRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();
        let category_id = CategoryId::new();
        let existing = existing_news(category_id);
        let id = existing.id;
        let author_id = existing.author_id;

        news_repository
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        category_repository.expect_find_by_id().times(0);
        news_repository
            .expect_update()
            .times(1)
            .returning(|news| Ok(news));

        let service = NewsService::new(Arc::new(news_repository), Arc::new(category_repository));

        let updated = service
            .update_news(
                id,
                UpdateNewsCommand {
                    category_id,
                    title: NewsTitle::new("New title".to_string()).unwrap(),
                    content: NewsContent::new("New content".to_string()).unwrap(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title.as_str(), "New title");
        assert_eq!(updated.author_id, author_id);
    }

    #[tokio::test]
    async fn test_update_news_to_unknown_category() {
        let mut news_repository = MockTestNewsRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();
        let existing = existing_news(CategoryId::new());
        let id = existing.id;

        news_repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        category_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        news_repository.expect_update().times(0);

        let service = NewsService::new(Arc::new(news_repository), Arc::new(category_repository));

        let result = service
            .update_news(
                id,
                UpdateNewsCommand {
                    category_id: CategoryId::new(),
                    title: NewsTitle::new("New title".to_string()).unwrap(),
                    content: NewsContent::new("New content".to_string()).unwrap(),
                },
            )
            .await;

        assert!(matches!(result, Err(NewsError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn test_category_lookup_failure_is_database_error() {
        let mut category_repository = MockTestCategoryRepository::new();
        category_repository
            .expect_find_by_id()
            .returning(|_| Err(CategoryError::DatabaseError("timeout".to_string())));

        let service = NewsService::new(
            Arc::new(MockTestNewsRepository::new()),
            Arc::new(category_repository),
        );

        let result = service.create_news(command(CategoryId::new()), UserId::new()).await;
        assert!(matches!(result, Err(NewsError::DatabaseError(_))));
    }
}
