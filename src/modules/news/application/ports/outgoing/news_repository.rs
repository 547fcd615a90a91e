use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for creating a news item
#[derive(Debug, Clone)]
pub struct CreateNewsData {
    pub title: String,
    pub preamble: String,
    pub body: String,
    pub body_as_markdown: bool,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub preamble: Option<String>,
    pub body: Option<String>,
    pub body_as_markdown: Option<bool>,
}

impl NewsPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.preamble.is_none()
            && self.body.is_none()
            && self.body_as_markdown.is_none()
    }
}

// Unified output DTO for news write operations
#[derive(Debug, Clone, Serialize)]
pub struct NewsResult {
    pub id: Uuid,
    pub title: String,
    pub preamble: String,
    pub body: String,
    pub body_as_markdown: bool,
    pub deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("News item not found")]
    NewsNotFound,
}

#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create_news(&self, data: CreateNewsData) -> Result<NewsResult, NewsRepositoryError>;

    async fn update_news(
        &self,
        news_id: Uuid,
        patch: NewsPatch,
    ) -> Result<NewsResult, NewsRepositoryError>;

    /// Per-instance delete: flips the flag through the ActiveModel so
    /// save-time behavior runs and `updated_at` advances. The row stays.
    async fn soft_delete_news(&self, news_id: Uuid) -> Result<(), NewsRepositoryError>;

    async fn restore_news(&self, news_id: Uuid) -> Result<NewsResult, NewsRepositoryError>;

    /// Moderation bulk path: one `UPDATE .. WHERE id IN (..)` statement.
    /// Deliberately skips per-instance save behavior; returns the number
    /// of rows the statement touched.
    async fn mark_deleted_many(&self, news_ids: Vec<Uuid>) -> Result<u64, NewsRepositoryError>;
}
