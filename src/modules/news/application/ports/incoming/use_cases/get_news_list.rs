use async_trait::async_trait;

use crate::news::application::ports::outgoing::{NewsListFilter, NewsView};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetNewsListError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Serves both the public feed (callers pin the filter to active rows)
/// and the moderation screen (tri-state deleted filter, date range,
/// search).
#[async_trait]
pub trait GetNewsListUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: NewsListFilter,
        page: PageRequest,
    ) -> Result<PageResult<NewsView>, GetNewsListError>;
}
