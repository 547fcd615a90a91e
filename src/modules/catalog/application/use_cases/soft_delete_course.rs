use crate::catalog::application::ports::outgoing::{CourseRepository, CourseRepositoryError};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SoftDeleteCourseError {
    CourseNotFound,
    RepositoryError(String),
}

/// Marks the course as deleted; lessons and feedback keep their rows
/// and their flags.
#[async_trait]
pub trait ISoftDeleteCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<(), SoftDeleteCourseError>;
}

#[derive(Debug, Clone)]
pub struct SoftDeleteCourseUseCase<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> SoftDeleteCourseUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISoftDeleteCourseUseCase for SoftDeleteCourseUseCase<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<(), SoftDeleteCourseError> {
        self.repository
            .soft_delete_course(course_id)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::CourseNotFound => SoftDeleteCourseError::CourseNotFound,
                CourseRepositoryError::DatabaseError(msg) => {
                    SoftDeleteCourseError::RepositoryError(msg)
                }
            })
    }
}
