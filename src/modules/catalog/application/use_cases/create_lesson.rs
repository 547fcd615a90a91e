use crate::catalog::application::ports::outgoing::{
    CourseQuery, CourseQueryError, CreateLessonData, LessonRepository, LessonResult,
};
use async_trait::async_trait;
use uuid::Uuid;

pub const LESSON_TITLE_MAX: usize = 256;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateLessonCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {LESSON_TITLE_MAX} characters")]
    TitleTooLong,

    #[error("Lesson number cannot be negative")]
    NegativeNum,
}

#[derive(Debug, Clone)]
pub struct CreateLessonCommand {
    course_id: Uuid,
    num: i32,
    title: String,
    description: String,
}

impl CreateLessonCommand {
    /// `num` defaults to zero when not supplied.
    pub fn new(
        course_id: Uuid,
        num: Option<i32>,
        title: String,
        description: String,
    ) -> Result<Self, CreateLessonCommandError> {
        let num = num.unwrap_or(0);
        if num < 0 {
            return Err(CreateLessonCommandError::NegativeNum);
        }

        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CreateLessonCommandError::EmptyTitle);
        }
        if title.chars().count() > LESSON_TITLE_MAX {
            return Err(CreateLessonCommandError::TitleTooLong);
        }

        Ok(Self {
            course_id,
            num,
            title,
            description,
        })
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn into_data(self) -> CreateLessonData {
        CreateLessonData {
            course_id: self.course_id,
            num: self.num,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CreateLessonError {
    CourseNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateLessonUseCase: Send + Sync {
    async fn execute(&self, command: CreateLessonCommand)
        -> Result<LessonResult, CreateLessonError>;
}

/// Lessons only exist inside a course, so the course is checked first;
/// the FK would catch it anyway, but this way the caller gets a clean
/// not-found instead of an integrity error.
#[derive(Debug, Clone)]
pub struct CreateLessonUseCase<Q, R>
where
    Q: CourseQuery,
    R: LessonRepository,
{
    course_query: Q,
    repository: R,
}

impl<Q, R> CreateLessonUseCase<Q, R>
where
    Q: CourseQuery,
    R: LessonRepository,
{
    pub fn new(course_query: Q, repository: R) -> Self {
        Self {
            course_query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateLessonUseCase for CreateLessonUseCase<Q, R>
where
    Q: CourseQuery + Send + Sync,
    R: LessonRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateLessonCommand,
    ) -> Result<LessonResult, CreateLessonError> {
        self.course_query
            .get_by_id(command.course_id(), false)
            .await
            .map_err(|e| match e {
                CourseQueryError::NotFound => CreateLessonError::CourseNotFound,
                CourseQueryError::DatabaseError(msg) => CreateLessonError::RepositoryError(msg),
            })?;

        self.repository
            .create_lesson(command.into_data())
            .await
            .map_err(|e| CreateLessonError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_defaults_to_zero() {
        let command = CreateLessonCommand::new(
            Uuid::new_v4(),
            None,
            "Введение".to_string(),
            "Первый урок".to_string(),
        )
        .unwrap();

        assert_eq!(command.into_data().num, 0);
    }

    #[test]
    fn rejects_negative_num() {
        let result = CreateLessonCommand::new(
            Uuid::new_v4(),
            Some(-1),
            "Введение".to_string(),
            "Первый урок".to_string(),
        );

        assert!(matches!(result, Err(CreateLessonCommandError::NegativeNum)));
    }

    #[test]
    fn rejects_blank_title() {
        let result = CreateLessonCommand::new(
            Uuid::new_v4(),
            Some(1),
            " ".to_string(),
            "Первый урок".to_string(),
        );

        assert!(matches!(result, Err(CreateLessonCommandError::EmptyTitle)));
    }
}
