use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for course creation
#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub title: String,
    pub description: String,
    pub cost: Decimal,
}

// Unified output DTO for course write operations
#[derive(Debug, Clone, Serialize)]
pub struct CourseResult {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cost: Decimal,
    pub deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Course not found")]
    CourseNotFound,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create_course(
        &self,
        data: CreateCourseData,
    ) -> Result<CourseResult, CourseRepositoryError>;

    /// Marks the course; its lessons and feedback stay untouched.
    async fn soft_delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError>;

    /// Physically removes the row. Lessons, feedback and teacher links
    /// disappear with it through the cascade rules on their FKs.
    async fn hard_delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError>;
}
