use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::ports::incoming::use_cases::{RestoreNewsError, RestoreNewsUseCase};
use crate::news::application::ports::outgoing::{
    NewsRepository, NewsRepositoryError, NewsResult,
};

#[derive(Debug, Clone)]
pub struct RestoreNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
}

impl<R> RestoreNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RestoreNewsUseCase for RestoreNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, news_id: Uuid) -> Result<NewsResult, RestoreNewsError> {
        self.repository
            .restore_news(news_id)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::NewsNotFound => RestoreNewsError::NewsNotFound,
                NewsRepositoryError::DatabaseError(msg) => RestoreNewsError::DatabaseError(msg),
            })
    }
}
