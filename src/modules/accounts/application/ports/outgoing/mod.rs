mod account_query;
mod account_repository;
mod password_hasher;

pub use account_query::{AccountQuery, AccountQueryError};
pub use account_repository::{
    AccountRepository, AccountRepositoryError, AccountResult, CreateAccountData, ProfilePatch,
};
pub use password_hasher::{HashError, PasswordHasher};
