use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::lifecycle::Lifecycle;
use crate::shared::pagination::{PageRequest, PageResult};

/// Read-only DTO for news listings and lookups.
#[derive(Debug, Clone, Serialize)]
pub struct NewsView {
    pub id: Uuid,
    pub title: String,
    pub preamble: String,
    pub body: String,
    pub body_as_markdown: bool,
    pub lifecycle: Lifecycle,
}

impl NewsView {
    /// Human-readable label shown in moderation listings.
    pub fn label(&self) -> String {
        format!("#{} {}", self.id, self.title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsListFilter {
    /// Tri-state moderation filter: `Some(false)` active rows only,
    /// `Some(true)` deleted rows only, `None` everything.
    pub deleted: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    /// Case-insensitive substring match across title, preamble and body.
    pub search: Option<String>,
}

impl NewsListFilter {
    /// The public feed: soft-deleted rows stay hidden.
    pub fn active_only() -> Self {
        Self {
            deleted: Some(false),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("News item not found")]
    NotFound,
}

#[async_trait]
pub trait NewsQuery: Send + Sync {
    async fn get_by_id(
        &self,
        news_id: Uuid,
        include_deleted: bool,
    ) -> Result<NewsView, NewsQueryError>;

    /// Newest-first listing. The `deleted` filter is always explicit;
    /// there is no hidden default exclusion at this layer.
    async fn list(
        &self,
        filter: NewsListFilter,
        page: PageRequest,
    ) -> Result<PageResult<NewsView>, NewsQueryError>;
}
