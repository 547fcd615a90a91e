use async_trait::async_trait;

use crate::news::application::ports::incoming::use_cases::{
    UpdateNewsCommand, UpdateNewsError, UpdateNewsUseCase,
};
use crate::news::application::ports::outgoing::{
    NewsRepository, NewsRepositoryError, NewsResult,
};

#[derive(Debug, Clone)]
pub struct UpdateNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
}

impl<R> UpdateNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateNewsUseCase for UpdateNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateNewsCommand) -> Result<NewsResult, UpdateNewsError> {
        let (news_id, patch) = command.into_parts();

        self.repository
            .update_news(news_id, patch)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::NewsNotFound => UpdateNewsError::NewsNotFound,
                NewsRepositoryError::DatabaseError(msg) => UpdateNewsError::DatabaseError(msg),
            })
    }
}
