use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::ports::incoming::use_cases::{NEWS_PREAMBLE_MAX, NEWS_TITLE_MAX};
use crate::news::application::ports::outgoing::{NewsPatch, NewsResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateNewsCommandError {
    #[error("Nothing to update")]
    EmptyPatch,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {NEWS_TITLE_MAX} characters")]
    TitleTooLong,

    #[error("Preamble cannot be empty")]
    EmptyPreamble,

    #[error("Preamble must not exceed {NEWS_PREAMBLE_MAX} characters")]
    PreambleTooLong,
}

/// Validated partial update for a news item. Fields left `None` keep
/// their stored values; provided fields obey the same bounds as
/// creation.
#[derive(Debug, Clone)]
pub struct UpdateNewsCommand {
    news_id: Uuid,
    patch: NewsPatch,
}

impl UpdateNewsCommand {
    pub fn new(
        news_id: Uuid,
        title: Option<String>,
        preamble: Option<String>,
        body: Option<String>,
        body_as_markdown: Option<bool>,
    ) -> Result<Self, UpdateNewsCommandError> {
        let title = match title {
            Some(t) => {
                let t = t.trim().to_string();
                if t.is_empty() {
                    return Err(UpdateNewsCommandError::EmptyTitle);
                }
                if t.chars().count() > NEWS_TITLE_MAX {
                    return Err(UpdateNewsCommandError::TitleTooLong);
                }
                Some(t)
            }
            None => None,
        };

        let preamble = match preamble {
            Some(p) => {
                let p = p.trim().to_string();
                if p.is_empty() {
                    return Err(UpdateNewsCommandError::EmptyPreamble);
                }
                if p.chars().count() > NEWS_PREAMBLE_MAX {
                    return Err(UpdateNewsCommandError::PreambleTooLong);
                }
                Some(p)
            }
            None => None,
        };

        let patch = NewsPatch {
            title,
            preamble,
            body,
            body_as_markdown,
        };

        if patch.is_empty() {
            return Err(UpdateNewsCommandError::EmptyPatch);
        }

        Ok(Self { news_id, patch })
    }

    pub fn into_parts(self) -> (Uuid, NewsPatch) {
        (self.news_id, self.patch)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateNewsError {
    #[error("News item not found")]
    NewsNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UpdateNewsUseCase: Send + Sync {
    async fn execute(&self, command: UpdateNewsCommand) -> Result<NewsResult, UpdateNewsError>;
}
