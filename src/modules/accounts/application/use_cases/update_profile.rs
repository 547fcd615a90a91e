use crate::accounts::application::domain::validate_age;
use crate::accounts::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, AccountResult, ProfilePatch,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    /// Carries the fixed localized rejection message.
    Underage(String),
    AccountNotFound,
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub account_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, input: UpdateProfileInput)
        -> Result<AccountResult, UpdateProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<R: AccountRepository> {
    repository: R,
}

impl<R: AccountRepository> UpdateProfileUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: UpdateProfileInput,
    ) -> Result<AccountResult, UpdateProfileError> {
        // Same gate as registration: an explicit sub-18 age is the only
        // rejection, absence sails through.
        let age = validate_age(input.age).map_err(|e| UpdateProfileError::Underage(e.0))?;

        let patch = ProfilePatch {
            first_name: input.first_name,
            last_name: input.last_name,
            age,
            avatar_url: input.avatar_url,
        };

        self.repository
            .update_profile(input.account_id, patch)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => UpdateProfileError::AccountNotFound,
                AccountRepositoryError::DatabaseError(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
            })
    }
}
