use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::ports::incoming::use_cases::{
    SoftDeleteNewsError, SoftDeleteNewsUseCase,
};
use crate::news::application::ports::outgoing::{NewsRepository, NewsRepositoryError};

#[derive(Debug, Clone)]
pub struct SoftDeleteNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
}

impl<R> SoftDeleteNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteNewsUseCase for SoftDeleteNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, news_id: Uuid) -> Result<(), SoftDeleteNewsError> {
        self.repository
            .soft_delete_news(news_id)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::NewsNotFound => SoftDeleteNewsError::NewsNotFound,
                NewsRepositoryError::DatabaseError(msg) => SoftDeleteNewsError::DatabaseError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::application::ports::outgoing::{CreateNewsData, NewsPatch, NewsResult};

    struct MockNewsRepository {
        result: Result<(), NewsRepositoryError>,
    }

    #[async_trait]
    impl NewsRepository for MockNewsRepository {
        async fn create_news(
            &self,
            _data: CreateNewsData,
        ) -> Result<NewsResult, NewsRepositoryError> {
            unimplemented!()
        }

        async fn update_news(
            &self,
            _news_id: Uuid,
            _patch: NewsPatch,
        ) -> Result<NewsResult, NewsRepositoryError> {
            unimplemented!()
        }

        async fn soft_delete_news(&self, _news_id: Uuid) -> Result<(), NewsRepositoryError> {
            self.result.clone()
        }

        async fn restore_news(&self, _news_id: Uuid) -> Result<NewsResult, NewsRepositoryError> {
            unimplemented!()
        }

        async fn mark_deleted_many(
            &self,
            _news_ids: Vec<Uuid>,
        ) -> Result<u64, NewsRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn soft_delete_succeeds() {
        let service = SoftDeleteNewsService::new(MockNewsRepository { result: Ok(()) });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_row_maps_to_not_found() {
        let service = SoftDeleteNewsService::new(MockNewsRepository {
            result: Err(NewsRepositoryError::NewsNotFound),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(SoftDeleteNewsError::NewsNotFound)));
    }
}
