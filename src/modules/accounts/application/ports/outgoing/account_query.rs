use async_trait::async_trait;
use uuid::Uuid;

use super::account_repository::AccountResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AccountResult>, AccountQueryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountResult>, AccountQueryError>;

    async fn find_by_email(&self, email: &str)
        -> Result<Option<AccountResult>, AccountQueryError>;
}
