use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::lifecycle::Lifecycle;

#[derive(Debug, Clone, Serialize)]
pub struct TeacherView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TeacherQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TeacherQuery: Send + Sync {
    async fn teachers_for_course(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<TeacherView>, TeacherQueryError>;
}
