use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::lifecycle::Lifecycle;

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackView {
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub feedback: String,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FeedbackQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    async fn feedback_for_course(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<FeedbackView>, FeedbackQueryError>;
}
