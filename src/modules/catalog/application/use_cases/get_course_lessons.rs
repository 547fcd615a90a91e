use crate::catalog::application::ports::outgoing::{LessonQuery, LessonView};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum GetCourseLessonsError {
    RepositoryError(String),
}

#[async_trait]
pub trait IGetCourseLessonsUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<LessonView>, GetCourseLessonsError>;
}

#[derive(Debug, Clone)]
pub struct GetCourseLessonsUseCase<Q: LessonQuery> {
    query: Q,
}

impl<Q: LessonQuery> GetCourseLessonsUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCourseLessonsUseCase for GetCourseLessonsUseCase<Q>
where
    Q: LessonQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<LessonView>, GetCourseLessonsError> {
        self.query
            .lessons_for_course(course_id, include_deleted)
            .await
            .map_err(|e| GetCourseLessonsError::RepositoryError(e.to_string()))
    }
}
