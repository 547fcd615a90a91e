use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{FeedbackResult, FeedbackView};
use crate::shared::lifecycle::Lifecycle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub course_id: Uuid,

    pub user_id: Uuid,

    pub rating: i16,

    pub feedback: String,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> FeedbackResult {
        FeedbackResult {
            id: self.id,
            course_id: self.course_id,
            user_id: self.user_id,
            rating: self.rating,
            feedback: self.feedback.clone(),
            deleted: self.is_deleted,
        }
    }

    pub fn to_view(&self) -> FeedbackView {
        FeedbackView {
            id: self.id,
            course_id: self.course_id,
            user_id: self.user_id,
            rating: self.rating,
            feedback: self.feedback.clone(),
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
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    User,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
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
