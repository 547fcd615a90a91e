use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::ports::outgoing::NewsResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreNewsError {
    #[error("News item not found")]
    NewsNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RestoreNewsUseCase: Send + Sync {
    async fn execute(&self, news_id: Uuid) -> Result<NewsResult, RestoreNewsError>;
}
