use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::news::application::ports::outgoing::{NewsResult, NewsView};
use crate::shared::lifecycle::Lifecycle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub preamble: String,

    pub body: String,

    pub body_as_markdown: bool,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> NewsResult {
        NewsResult {
            id: self.id,
            title: self.title.clone(),
            preamble: self.preamble.clone(),
            body: self.body.clone(),
            body_as_markdown: self.body_as_markdown,
            deleted: self.is_deleted,
        }
    }

    pub fn to_view(&self) -> NewsView {
        NewsView {
            id: self.id,
            title: self.title.clone(),
            preamble: self.preamble.clone(),
            body: self.body.clone(),
            body_as_markdown: self.body_as_markdown,
            lifecycle: Lifecycle {
                created_at: self.created_at.into(),
                updated_at: self.updated_at.into(),
                deleted: self.is_deleted,
            },
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
