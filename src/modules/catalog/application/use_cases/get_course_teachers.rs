use crate::catalog::application::ports::outgoing::{TeacherQuery, TeacherView};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum GetCourseTeachersError {
    RepositoryError(String),
}

#[async_trait]
pub trait IGetCourseTeachersUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<TeacherView>, GetCourseTeachersError>;
}

#[derive(Debug, Clone)]
pub struct GetCourseTeachersUseCase<Q: TeacherQuery> {
    query: Q,
}

impl<Q: TeacherQuery> GetCourseTeachersUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCourseTeachersUseCase for GetCourseTeachersUseCase<Q>
where
    Q: TeacherQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<TeacherView>, GetCourseTeachersError> {
        self.query
            .teachers_for_course(course_id, include_deleted)
            .await
            .map_err(|e| GetCourseTeachersError::RepositoryError(e.to_string()))
    }
}
