use async_trait::async_trait;

use crate::news::application::ports::outgoing::{CreateNewsData, NewsResult};

pub const NEWS_TITLE_MAX: usize = 256;
pub const NEWS_PREAMBLE_MAX: usize = 512;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateNewsCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {NEWS_TITLE_MAX} characters")]
    TitleTooLong,

    #[error("Preamble cannot be empty")]
    EmptyPreamble,

    #[error("Preamble must not exceed {NEWS_PREAMBLE_MAX} characters")]
    PreambleTooLong,
}

/// Validated input for news creation. Construction is the only way in,
/// so every command that reaches a service already satisfies the bounds.
#[derive(Debug, Clone)]
pub struct CreateNewsCommand {
    title: String,
    preamble: String,
    body: String,
    body_as_markdown: bool,
}

impl CreateNewsCommand {
    pub fn new(
        title: String,
        preamble: String,
        body: String,
        body_as_markdown: bool,
    ) -> Result<Self, CreateNewsCommandError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CreateNewsCommandError::EmptyTitle);
        }
        if title.chars().count() > NEWS_TITLE_MAX {
            return Err(CreateNewsCommandError::TitleTooLong);
        }

        let preamble = preamble.trim().to_string();
        if preamble.is_empty() {
            return Err(CreateNewsCommandError::EmptyPreamble);
        }
        if preamble.chars().count() > NEWS_PREAMBLE_MAX {
            return Err(CreateNewsCommandError::PreambleTooLong);
        }

        Ok(Self {
            title,
            preamble,
            body,
            body_as_markdown,
        })
    }

    pub fn into_data(self) -> CreateNewsData {
        CreateNewsData {
            title: self.title,
            preamble: self.preamble,
            body: self.body,
            body_as_markdown: self.body_as_markdown,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateNewsError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CreateNewsUseCase: Send + Sync {
    async fn execute(&self, command: CreateNewsCommand) -> Result<NewsResult, CreateNewsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_input() {
        let command = CreateNewsCommand::new(
            "  Свежие новости  ".to_string(),
            "Вступление".to_string(),
            "Содержание".to_string(),
            false,
        )
        .unwrap();

        let data = command.into_data();
        assert_eq!(data.title, "Свежие новости");
        assert!(!data.body_as_markdown);
    }

    #[test]
    fn rejects_blank_title() {
        let result = CreateNewsCommand::new(
            "   ".to_string(),
            "Вступление".to_string(),
            "Содержание".to_string(),
            false,
        );

        assert!(matches!(result, Err(CreateNewsCommandError::EmptyTitle)));
    }

    #[test]
    fn rejects_overlong_title() {
        let result = CreateNewsCommand::new(
            "a".repeat(NEWS_TITLE_MAX + 1),
            "Вступление".to_string(),
            "Содержание".to_string(),
            false,
        );

        assert!(matches!(result, Err(CreateNewsCommandError::TitleTooLong)));
    }

    #[test]
    fn rejects_overlong_preamble() {
        let result = CreateNewsCommand::new(
            "Заголовок".to_string(),
            "b".repeat(NEWS_PREAMBLE_MAX + 1),
            "Содержание".to_string(),
            true,
        );

        assert!(matches!(
            result,
            Err(CreateNewsCommandError::PreambleTooLong)
        ));
    }
}
