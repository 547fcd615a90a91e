use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for lesson creation
#[derive(Debug, Clone)]
pub struct CreateLessonData {
    pub course_id: Uuid,
    pub num: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonResult {
    pub id: Uuid,
    pub course_id: Uuid,
    pub num: i32,
    pub title: String,
    pub description: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LessonRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create_lesson(
        &self,
        data: CreateLessonData,
    ) -> Result<LessonResult, LessonRepositoryError>;
}
