use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    CreateFeedbackData, FeedbackRepository, FeedbackRepositoryError, FeedbackResult,
};

use super::sea_orm_entity::course_feedback::ActiveModel as FeedbackActiveModel;

#[derive(Debug, Clone)]
pub struct FeedbackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeedbackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> FeedbackRepositoryError {
    match e.sql_err() {
        // A dangling course or user id trips the FK, not our code
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => FeedbackRepositoryError::ParentMissing,
        _ => FeedbackRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryPostgres {
    async fn create_feedback(
        &self,
        data: CreateFeedbackData,
    ) -> Result<FeedbackResult, FeedbackRepositoryError> {
        let active = FeedbackActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(data.course_id),
            user_id: Set(data.user_id),
            rating: Set(data.rating),
            feedback: Set(data.feedback),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_repository_result())
    }
}
