use crate::catalog::application::ports::outgoing::{TeacherRepository, TeacherRepositoryError};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum AssignTeacherError {
    AlreadyAssigned,
    CourseOrTeacherNotFound,
    RepositoryError(String),
}

/// One teacher can run many courses and one course can have many
/// teachers; assignment is a row in the link table, nothing more.
#[async_trait]
pub trait IAssignTeacherUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid, teacher_id: Uuid) -> Result<(), AssignTeacherError>;
}

#[derive(Debug, Clone)]
pub struct AssignTeacherUseCase<R: TeacherRepository> {
    repository: R,
}

impl<R: TeacherRepository> AssignTeacherUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IAssignTeacherUseCase for AssignTeacherUseCase<R>
where
    R: TeacherRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid, teacher_id: Uuid) -> Result<(), AssignTeacherError> {
        self.repository
            .assign_to_course(course_id, teacher_id)
            .await
            .map_err(|e| match e {
                TeacherRepositoryError::AlreadyAssigned => AssignTeacherError::AlreadyAssigned,
                TeacherRepositoryError::LinkTargetMissing => {
                    AssignTeacherError::CourseOrTeacherNotFound
                }
                TeacherRepositoryError::DatabaseError(msg) => {
                    AssignTeacherError::RepositoryError(msg)
                }
            })
    }
}
