use crate::catalog::application::ports::outgoing::{CourseRepository, CourseRepositoryError};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum HardDeleteCourseError {
    CourseNotFound,
    RepositoryError(String),
}

/// Physical removal. The storage layer cascades the delete to the
/// course's lessons, feedback and teacher links; other courses' rows
/// are untouched.
#[async_trait]
pub trait IHardDeleteCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<(), HardDeleteCourseError>;
}

#[derive(Debug, Clone)]
pub struct HardDeleteCourseUseCase<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> HardDeleteCourseUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IHardDeleteCourseUseCase for HardDeleteCourseUseCase<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<(), HardDeleteCourseError> {
        self.repository
            .hard_delete_course(course_id)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CourseNotFound => HardDeleteCourseError::CourseNotFound,
                CourseRepositoryError::DatabaseError(msg) => {
                    HardDeleteCourseError::RepositoryError(msg)
                }
            })
    }
}
