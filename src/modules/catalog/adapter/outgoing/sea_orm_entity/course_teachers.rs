use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{TeacherResult, TeacherView};
use crate::shared::lifecycle::Lifecycle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TeacherResult {
        TeacherResult {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            deleted: self.is_deleted,
        }
    }

    pub fn to_view(&self) -> TeacherView {
        TeacherView {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            lifecycle: Lifecycle {
                created_at: self.created_at.into(),
                updated_at: self.updated_at.into(),
                deleted: self.is_deleted,
            },
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_teacher_links::Entity")]
    Links,
}

impl Related<super::course_teacher_links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Links.def()
    }
}

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
