use async_trait::async_trait;

use crate::news::application::ports::incoming::use_cases::{
    CreateNewsCommand, CreateNewsError, CreateNewsUseCase,
};
use crate::news::application::ports::outgoing::{NewsRepository, NewsResult};

#[derive(Debug, Clone)]
pub struct CreateNewsService<R>
where
    R: NewsRepository,
{
    repository: R,
}

impl<R> CreateNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateNewsUseCase for CreateNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, command: CreateNewsCommand) -> Result<NewsResult, CreateNewsError> {
        self.repository
            .create_news(command.into_data())
            .await
            .map_err(|e| CreateNewsError::DatabaseError(e.to_string()))
    }
}
