use crate::catalog::application::ports::outgoing::{
    CreateFeedbackData, FeedbackRepository, FeedbackRepositoryError, FeedbackResult,
};
use crate::shared::messages::{ru, MessageId};
use async_trait::async_trait;
use uuid::Uuid;

pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;
pub const RATING_DEFAULT: i16 = 5;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateFeedbackCommandError {
    #[error("Rating must be between {RATING_MIN} and {RATING_MAX}")]
    InvalidRating,
}

/// Validated feedback submission. The rating is pinned to the closed
/// 1..=5 set here and once more by the CHECK constraint in storage;
/// missing text gets the localized placeholder.
#[derive(Debug, Clone)]
pub struct CreateFeedbackCommand {
    course_id: Uuid,
    user_id: Uuid,
    rating: i16,
    feedback: String,
}

impl CreateFeedbackCommand {
    pub fn new(
        course_id: Uuid,
        user_id: Uuid,
        rating: Option<i16>,
        feedback: Option<String>,
    ) -> Result<Self, CreateFeedbackCommandError> {
        let rating = rating.unwrap_or(RATING_DEFAULT);
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(CreateFeedbackCommandError::InvalidRating);
        }

        let feedback = match feedback {
            Some(text) if !text.trim().is_empty() => text,
            _ => ru(MessageId::FeedbackPlaceholder).to_string(),
        };

        Ok(Self {
            course_id,
            user_id,
            rating,
            feedback,
        })
    }

    pub fn into_data(self) -> CreateFeedbackData {
        CreateFeedbackData {
            course_id: self.course_id,
            user_id: self.user_id,
            rating: self.rating,
            feedback: self.feedback,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CreateFeedbackError {
    CourseOrAccountNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateFeedbackCommand,
    ) -> Result<FeedbackResult, CreateFeedbackError>;
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackUseCase<R: FeedbackRepository> {
    repository: R,
}

impl<R: FeedbackRepository> CreateFeedbackUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateFeedbackUseCase for CreateFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateFeedbackCommand,
    ) -> Result<FeedbackResult, CreateFeedbackError> {
        self.repository
            .create_feedback(command.into_data())
            .await
            .map_err(|e| match e {
                FeedbackRepositoryError::ParentMissing => {
                    CreateFeedbackError::CourseOrAccountNotFound
                }
                FeedbackRepositoryError::DatabaseError(msg) => {
                    CreateFeedbackError::RepositoryError(msg)
                }
            })
    }
}
