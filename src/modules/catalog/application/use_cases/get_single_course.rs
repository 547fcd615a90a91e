use crate::catalog::application::ports::outgoing::{CourseQuery, CourseQueryError, CourseView};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum GetSingleCourseError {
    CourseNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IGetSingleCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<CourseView, GetSingleCourseError>;
}

#[derive(Debug, Clone)]
pub struct GetSingleCourseUseCase<Q: CourseQuery> {
    query: Q,
}

impl<Q: CourseQuery> GetSingleCourseUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetSingleCourseUseCase for GetSingleCourseUseCase<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<CourseView, GetSingleCourseError> {
        self.query
            .get_by_id(course_id, include_deleted)
            .await
            .map_err(|e| match e {
                CourseQueryError::NotFound => GetSingleCourseError::CourseNotFound,
                CourseQueryError::DatabaseError(msg) => GetSingleCourseError::RepositoryError(msg),
            })
    }
}
