use crate::catalog::application::ports::outgoing::{CourseQuery, CourseView};
use crate::shared::pagination::{PageRequest, PageResult};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum GetCoursesError {
    RepositoryError(String),
}

#[async_trait]
pub trait IGetCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        include_deleted: bool,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, GetCoursesError>;
}

#[derive(Debug, Clone)]
pub struct GetCoursesUseCase<Q: CourseQuery> {
    query: Q,
}

impl<Q: CourseQuery> GetCoursesUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCoursesUseCase for GetCoursesUseCase<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        include_deleted: bool,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, GetCoursesError> {
        self.query
            .list(include_deleted, page)
            .await
            .map_err(|e| GetCoursesError::RepositoryError(e.to_string()))
    }
}
