use crate::catalog::application::ports::outgoing::{FeedbackQuery, FeedbackView};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum GetCourseFeedbackError {
    RepositoryError(String),
}

#[async_trait]
pub trait IGetCourseFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<FeedbackView>, GetCourseFeedbackError>;
}

#[derive(Debug, Clone)]
pub struct GetCourseFeedbackUseCase<Q: FeedbackQuery> {
    query: Q,
}

impl<Q: FeedbackQuery> GetCourseFeedbackUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCourseFeedbackUseCase for GetCourseFeedbackUseCase<Q>
where
    Q: FeedbackQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<FeedbackView>, GetCourseFeedbackError> {
        self.query
            .feedback_for_course(course_id, include_deleted)
            .await
            .map_err(|e| GetCourseFeedbackError::RepositoryError(e.to_string()))
    }
}
