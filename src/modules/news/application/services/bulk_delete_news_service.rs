use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::ports::incoming::use_cases::{
    BulkDeleteNewsError, BulkDeleteNewsUseCase,
};
use crate::news::application::ports::outgoing::NewsRepository;

#[derive(Debug, Clone)]
pub struct BulkDeleteNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
}

impl<R> BulkDeleteNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> BulkDeleteNewsUseCase for BulkDeleteNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, news_ids: Vec<Uuid>) -> Result<u64, BulkDeleteNewsError> {
        if news_ids.is_empty() {
            return Err(BulkDeleteNewsError::EmptySelection);
        }

        self.repository
            .mark_deleted_many(news_ids)
            .await
            .map_err(|e| BulkDeleteNewsError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::application::ports::outgoing::{
        CreateNewsData, NewsPatch, NewsRepositoryError, NewsResult,
    };

    struct MockNewsRepository {
        rows_affected: u64,
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
            unimplemented!()
        }

        async fn restore_news(&self, _news_id: Uuid) -> Result<NewsResult, NewsRepositoryError> {
            unimplemented!()
        }

        async fn mark_deleted_many(
            &self,
            news_ids: Vec<Uuid>,
        ) -> Result<u64, NewsRepositoryError> {
            assert!(!news_ids.is_empty());
            Ok(self.rows_affected)
        }
    }

    #[tokio::test]
    async fn empty_selection_is_rejected_before_touching_storage() {
        let service = BulkDeleteNewsService::new(MockNewsRepository { rows_affected: 0 });

        let result = service.execute(vec![]).await;

        assert!(matches!(result, Err(BulkDeleteNewsError::EmptySelection)));
    }

    #[tokio::test]
    async fn reports_affected_row_count() {
        let service = BulkDeleteNewsService::new(MockNewsRepository { rows_affected: 3 });

        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let affected = service.execute(ids).await.unwrap();

        assert_eq!(affected, 3);
    }
}
