use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for teacher creation
#[derive(Debug, Clone)]
pub struct CreateTeacherData {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherResult {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TeacherRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Teacher is already assigned to this course")]
    AlreadyAssigned,

    #[error("Course or teacher not found")]
    LinkTargetMissing,
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create_teacher(
        &self,
        data: CreateTeacherData,
    ) -> Result<TeacherResult, TeacherRepositoryError>;

    /// Inserts one row into the course↔teacher link table. A repeated
    /// pair hits the composite PK and surfaces as `AlreadyAssigned`.
    async fn assign_to_course(
        &self,
        course_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<(), TeacherRepositoryError>;
}
