use crate::accounts::application::ports::outgoing::{AccountQuery, AccountResult};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    AccountNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<AccountResult, FetchProfileError>;
}

#[derive(Debug, Clone)]
pub struct FetchProfileUseCase<Q: AccountQuery> {
    query: Q,
}

impl<Q: AccountQuery> FetchProfileUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<AccountResult, FetchProfileError> {
        self.query
            .find_by_id(account_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::AccountNotFound)
    }
}
