use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    FeedbackQuery, FeedbackQueryError, FeedbackView,
};

use super::sea_orm_entity::course_feedback::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct FeedbackQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeedbackQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedbackQuery for FeedbackQueryPostgres {
    async fn feedback_for_course(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<FeedbackView>, FeedbackQueryError> {
        let mut query = Entity::find().filter(Column::CourseId.eq(course_id));

        if !include_deleted {
            query = query.filter(Column::IsDeleted.eq(false));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| FeedbackQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Model::to_view).collect())
    }
}
