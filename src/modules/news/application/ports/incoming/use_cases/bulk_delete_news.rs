use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BulkDeleteNewsError {
    #[error("No rows selected")]
    EmptySelection,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The moderation "mark as deleted" action over a selected set of rows.
///
/// Runs as a single mass update, so instance-level save behavior does
/// not fire for the affected rows; callers who need it should delete
/// rows one by one instead. Returns how many rows were touched.
#[async_trait]
pub trait BulkDeleteNewsUseCase: Send + Sync {
    async fn execute(&self, news_ids: Vec<Uuid>) -> Result<u64, BulkDeleteNewsError>;
}
