use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for account creation
#[derive(Debug, Clone)]
pub struct CreateAccountData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

/// Partial profile update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

// Unified output DTO for account operations
#[derive(Debug, Clone, Serialize)]
pub struct AccountResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Account not found")]
    AccountNotFound,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError>;

    async fn update_profile(
        &self,
        account_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<AccountResult, AccountRepositoryError>;
}
