use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    CreateLessonData, LessonRepository, LessonRepositoryError, LessonResult,
};

use super::sea_orm_entity::lessons::ActiveModel as LessonActiveModel;

#[derive(Debug, Clone)]
pub struct LessonRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LessonRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LessonRepository for LessonRepositoryPostgres {
    async fn create_lesson(
        &self,
        data: CreateLessonData,
    ) -> Result<LessonResult, LessonRepositoryError> {
        let active = LessonActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(data.course_id),
            num: Set(data.num),
            title: Set(data.title),
            description: Set(data.description),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| LessonRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }
}
