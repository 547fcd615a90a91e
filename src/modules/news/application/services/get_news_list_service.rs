use async_trait::async_trait;

use crate::news::application::ports::incoming::use_cases::{GetNewsListError, GetNewsListUseCase};
use crate::news::application::ports::outgoing::{NewsListFilter, NewsQuery, NewsView};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct GetNewsListService<Q>
where
    Q: NewsQuery,
{
    query: Q,
}

impl<Q> GetNewsListService<Q>
where
    Q: NewsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetNewsListUseCase for GetNewsListService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: NewsListFilter,
        page: PageRequest,
    ) -> Result<PageResult<NewsView>, GetNewsListError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| GetNewsListError::DatabaseError(e.to_string()))
    }
}
