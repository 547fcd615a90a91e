use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeleteNewsError {
    #[error("News item not found")]
    NewsNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Instance-level delete: the row is marked, never removed, and can be
/// restored later.
#[async_trait]
pub trait SoftDeleteNewsUseCase: Send + Sync {
    async fn execute(&self, news_id: Uuid) -> Result<(), SoftDeleteNewsError>;
}
