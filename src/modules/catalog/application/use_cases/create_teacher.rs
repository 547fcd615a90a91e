use crate::catalog::application::ports::outgoing::{
    CreateTeacherData, TeacherRepository, TeacherResult,
};
use async_trait::async_trait;

pub const TEACHER_NAME_MAX: usize = 256;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTeacherCommandError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Name must not exceed {TEACHER_NAME_MAX} characters")]
    NameTooLong,
}

#[derive(Debug, Clone)]
pub struct CreateTeacherCommand {
    first_name: String,
    last_name: String,
}

impl CreateTeacherCommand {
    pub fn new(first_name: String, last_name: String) -> Result<Self, CreateTeacherCommandError> {
        let first_name = first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(CreateTeacherCommandError::EmptyFirstName);
        }

        let last_name = last_name.trim().to_string();
        if last_name.is_empty() {
            return Err(CreateTeacherCommandError::EmptyLastName);
        }

        if first_name.chars().count() > TEACHER_NAME_MAX
            || last_name.chars().count() > TEACHER_NAME_MAX
        {
            return Err(CreateTeacherCommandError::NameTooLong);
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn into_data(self) -> CreateTeacherData {
        CreateTeacherData {
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CreateTeacherError {
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateTeacherUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateTeacherCommand,
    ) -> Result<TeacherResult, CreateTeacherError>;
}

#[derive(Debug, Clone)]
pub struct CreateTeacherUseCase<R: TeacherRepository> {
    repository: R,
}

impl<R: TeacherRepository> CreateTeacherUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateTeacherUseCase for CreateTeacherUseCase<R>
where
    R: TeacherRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateTeacherCommand,
    ) -> Result<TeacherResult, CreateTeacherError> {
        self.repository
            .create_teacher(command.into_data())
            .await
            .map_err(|e| CreateTeacherError::RepositoryError(e.to_string()))
    }
}
