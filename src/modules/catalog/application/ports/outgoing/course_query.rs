use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::lifecycle::Lifecycle;
use crate::shared::pagination::{PageRequest, PageResult};

/// Read-only DTO for catalog listings.
#[derive(Debug, Clone, Serialize)]
pub struct CourseView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cost: Decimal,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Course not found")]
    NotFound,
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn get_by_id(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<CourseView, CourseQueryError>;

    /// Newest-first catalog listing; `include_deleted` is the explicit
    /// escape hatch for moderation reads.
    async fn list(
        &self,
        include_deleted: bool,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, CourseQueryError>;
}
