use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, AccountResult, CreateAccountData, ProfilePatch,
};

// SeaORM entity imports
use super::sea_orm_entity::ActiveModel as UserActiveModel;

#[derive(Debug, Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AccountRepositoryError {
    match e {
        DbErr::RecordNotUpdated => AccountRepositoryError::AccountNotFound,
        other => AccountRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            age: Set(data.age),
            avatar_url: Set(data.avatar_url),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_account_result())
    }

    async fn update_profile(
        &self,
        account_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let mut active = UserActiveModel {
            id: Set(account_id),
            ..Default::default()
        };

        if let Some(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(age) = patch.age {
            active.age = Set(Some(age));
        }
        if let Some(avatar_url) = patch.avatar_url {
            active.avatar_url = Set(Some(avatar_url));
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_account_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::super::sea_orm_entity::Model as UserModel;

    fn user_model(id: Uuid, username: &str, age: Option<i32>) -> UserModel {
        let now = Utc::now().fixed_offset();

        UserModel {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$stub".to_string(),
            first_name: "Иван".to_string(),
            last_name: "Петров".to_string(),
            age,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_account_returns_inserted_row() {
        let account_id = Uuid::new_v4();
        let inserted = user_model(account_id, "ivanpetrov", Some(30));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted]])
            .into_connection();

        let repo = AccountRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_account(CreateAccountData {
                username: "ivanpetrov".to_string(),
                email: "ivanpetrov@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
                first_name: "Иван".to_string(),
                last_name: "Петров".to_string(),
                age: Some(30),
                avatar_url: None,
            })
            .await
            .unwrap();

        assert_eq!(result.id, account_id);
        assert_eq!(result.age, Some(30));
    }

    #[tokio::test]
    async fn update_profile_on_missing_account_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repo = AccountRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_profile(
                Uuid::new_v4(),
                ProfilePatch {
                    age: Some(42),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AccountRepositoryError::AccountNotFound)
        ));
    }
}
