use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::{
    AccountQuery, AccountQueryError, AccountResult,
};

use super::sea_orm_entity::{Column, Entity as Users, Model};

#[derive(Debug, Clone)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_result(model: Option<Model>) -> Option<AccountResult> {
    model.map(|m| m.to_account_result())
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AccountResult>, AccountQueryError> {
        let model = Users::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(to_result(model))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountResult>, AccountQueryError> {
        let model = Users::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(to_result(model))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountResult>, AccountQueryError> {
        let model = Users::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(to_result(model))
    }
}
