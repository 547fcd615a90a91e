use crate::accounts::application::domain::validate_age;
use crate::accounts::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountResult, CreateAccountData, PasswordHasher,
};
use async_trait::async_trait;
use std::sync::Arc;

// Possible errors for account registration
#[derive(Debug, Clone)]
pub enum RegisterAccountError {
    InvalidUsername(String),
    InvalidEmail(String),
    InvalidPassword(String),
    /// Carries the fixed localized rejection message.
    Underage(String),
    UsernameAlreadyExists,
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct RegisterAccountInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

// Interface for the registration use case
#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<AccountResult, RegisterAccountError>;
}

// Implementation of the registration use case
#[derive(Clone)]
pub struct RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    fn validate_username(username: &str) -> Result<String, RegisterAccountError> {
        let trimmed = username.trim();

        if trimmed.len() < 3 || trimmed.len() > 150 {
            return Err(RegisterAccountError::InvalidUsername(
                "Username must be between 3 and 150 characters".to_string(),
            ));
        }

        Ok(trimmed.to_string())
    }

    fn validate_email(email: &str) -> Result<String, RegisterAccountError> {
        let trimmed = email.trim();

        if !email_address::EmailAddress::is_valid(trimmed) {
            return Err(RegisterAccountError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        Ok(trimmed.to_string())
    }

    fn validate_password(password: &str) -> Result<(), RegisterAccountError> {
        if password.len() < 8 {
            return Err(RegisterAccountError::InvalidPassword(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> IRegisterAccountUseCase for RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<AccountResult, RegisterAccountError> {
        // 1. Field validation
        let username = Self::validate_username(&input.username)?;
        let email = Self::validate_email(&input.email)?;
        Self::validate_password(&input.password)?;

        // 2. The age gate; an absent age passes through untouched
        let age = validate_age(input.age).map_err(|e| RegisterAccountError::Underage(e.0))?;

        // 3. Uniqueness checks
        if let Ok(Some(_)) = self.query.find_by_username(&username).await {
            return Err(RegisterAccountError::UsernameAlreadyExists);
        }

        if let Ok(Some(_)) = self.query.find_by_email(&email).await {
            return Err(RegisterAccountError::EmailAlreadyExists);
        }

        // 4. Hash password
        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterAccountError::HashingFailed(e.to_string()))?;

        // 5. Persist
        self.repository
            .create_account(CreateAccountData {
                username,
                email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
                age,
                avatar_url: input.avatar_url,
            })
            .await
            .map_err(|e| RegisterAccountError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::ports::outgoing::{
        AccountQueryError, AccountRepositoryError, HashError, ProfilePatch,
    };
    use uuid::Uuid;

    struct StubAccountQuery {
        username_taken: bool,
        email_taken: bool,
    }

    #[async_trait]
    impl AccountQuery for StubAccountQuery {
        async fn find_by_id(
            &self,
            _account_id: Uuid,
        ) -> Result<Option<AccountResult>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<AccountResult>, AccountQueryError> {
            if self.username_taken {
                Ok(Some(sample_account(username, "taken@example.com")))
            } else {
                Ok(None)
            }
        }

        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<AccountResult>, AccountQueryError> {
            if self.email_taken {
                Ok(Some(sample_account("taken", email)))
            } else {
                Ok(None)
            }
        }
    }

    struct StubAccountRepository;

    #[async_trait]
    impl AccountRepository for StubAccountRepository {
        async fn create_account(
            &self,
            data: CreateAccountData,
        ) -> Result<AccountResult, AccountRepositoryError> {
            Ok(AccountResult {
                id: Uuid::new_v4(),
                username: data.username,
                email: data.email,
                first_name: data.first_name,
                last_name: data.last_name,
                age: data.age,
                avatar_url: data.avatar_url,
            })
        }

        async fn update_profile(
            &self,
            _account_id: Uuid,
            _patch: ProfilePatch,
        ) -> Result<AccountResult, AccountRepositoryError> {
            unimplemented!()
        }
    }

    struct StubHasher;

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("$argon2id$stub".to_string())
        }
    }

    fn sample_account(username: &str, email: &str) -> AccountResult {
        AccountResult {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Иван".to_string(),
            last_name: "Петров".to_string(),
            age: Some(30),
            avatar_url: None,
        }
    }

    fn use_case(
        username_taken: bool,
        email_taken: bool,
    ) -> RegisterAccountUseCase<StubAccountQuery, StubAccountRepository> {
        RegisterAccountUseCase::new(
            StubAccountQuery {
                username_taken,
                email_taken,
            },
            StubAccountRepository,
            Arc::new(StubHasher),
        )
    }

    fn input(age: Option<i32>) -> RegisterAccountInput {
        RegisterAccountInput {
            username: "ivanpetrov".to_string(),
            email: "ivan@example.com".to_string(),
            password: "correct-horse".to_string(),
            first_name: "Иван".to_string(),
            last_name: "Петров".to_string(),
            age,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn rejects_underage_with_fixed_message() {
        let result = use_case(false, false).execute(input(Some(17))).await;

        match result {
            Err(RegisterAccountError::Underage(message)) => {
                assert_eq!(
                    message,
                    "Для использования ресурса вам должно быть больше 18 лет"
                );
            }
            other => panic!("expected Underage, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn absent_age_registers_fine() {
        let account = use_case(false, false).execute(input(None)).await.unwrap();

        assert_eq!(account.username, "ivanpetrov");
        assert_eq!(account.age, None);
    }

    #[tokio::test]
    async fn exactly_eighteen_registers_fine() {
        let account = use_case(false, false)
            .execute(input(Some(18)))
            .await
            .unwrap();

        assert_eq!(account.age, Some(18));
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let result = use_case(true, false).execute(input(Some(25))).await;

        assert!(matches!(
            result,
            Err(RegisterAccountError::UsernameAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let result = use_case(false, true).execute(input(Some(25))).await;

        assert!(matches!(
            result,
            Err(RegisterAccountError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let mut bad = input(Some(25));
        bad.email = "not-an-email".to_string();

        let result = use_case(false, false).execute(bad).await;

        assert!(matches!(result, Err(RegisterAccountError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn rejects_short_password() {
        let mut bad = input(Some(25));
        bad.password = "short".to_string();

        let result = use_case(false, false).execute(bad).await;

        assert!(matches!(
            result,
            Err(RegisterAccountError::InvalidPassword(_))
        ));
    }
}
