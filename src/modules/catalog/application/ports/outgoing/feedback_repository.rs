use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for feedback creation
#[derive(Debug, Clone)]
pub struct CreateFeedbackData {
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResult {
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub feedback: String,
    pub deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FeedbackRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Course or account not found")]
    ParentMissing,
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create_feedback(
        &self,
        data: CreateFeedbackData,
    ) -> Result<FeedbackResult, FeedbackRepositoryError>;
}
