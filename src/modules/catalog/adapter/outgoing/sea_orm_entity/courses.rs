use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{CourseResult, CourseView};
use crate::shared::lifecycle::Lifecycle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub cost: Decimal,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> CourseResult {
        CourseResult {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            cost: self.cost,
            deleted: self.is_deleted,
        }
    }

    pub fn to_view(&self) -> CourseView {
        CourseView {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            cost: self.cost,
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
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::course_feedback::Entity")]
    Feedback,
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::course_feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedback.def()
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
