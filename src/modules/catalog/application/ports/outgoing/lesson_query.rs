use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::lifecycle::Lifecycle;

#[derive(Debug, Clone, Serialize)]
pub struct LessonView {
    pub id: Uuid,
    pub course_id: Uuid,
    pub num: i32,
    pub title: String,
    pub description: String,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LessonQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LessonQuery: Send + Sync {
    /// Lessons of one course, newest first like every other listing;
    /// `num` rides along for clients that present an ordered syllabus.
    async fn lessons_for_course(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<LessonView>, LessonQueryError>;
}
