use crate::catalog::application::ports::outgoing::{
    CourseRepository, CourseResult, CreateCourseData,
};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub const COURSE_TITLE_MAX: usize = 256;

/// numeric(6,2) tops out just short of ten thousand.
pub const COURSE_COST_MAX: Decimal = Decimal::from_parts(999999, 0, 0, false, 2);

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed {COURSE_TITLE_MAX} characters")]
    TitleTooLong,

    #[error("Cost cannot be negative")]
    NegativeCost,

    #[error("Cost must not exceed {COURSE_COST_MAX}")]
    CostTooLarge,

    #[error("Cost supports at most two fractional digits")]
    CostTooPrecise,
}

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    title: String,
    description: String,
    cost: Decimal,
}

impl CreateCourseCommand {
    /// `cost` defaults to zero when not supplied.
    pub fn new(
        title: String,
        description: String,
        cost: Option<Decimal>,
    ) -> Result<Self, CreateCourseCommandError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CreateCourseCommandError::EmptyTitle);
        }
        if title.chars().count() > COURSE_TITLE_MAX {
            return Err(CreateCourseCommandError::TitleTooLong);
        }

        let cost = cost.unwrap_or(Decimal::ZERO);
        if cost.is_sign_negative() && !cost.is_zero() {
            return Err(CreateCourseCommandError::NegativeCost);
        }
        if cost > COURSE_COST_MAX {
            return Err(CreateCourseCommandError::CostTooLarge);
        }
        if cost != cost.round_dp(2) {
            return Err(CreateCourseCommandError::CostTooPrecise);
        }

        Ok(Self {
            title,
            description,
            cost,
        })
    }

    pub fn into_data(self) -> CreateCourseData {
        CreateCourseData {
            title: self.title,
            description: self.description,
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CreateCourseError {
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand)
        -> Result<CourseResult, CreateCourseError>;
}

#[derive(Debug, Clone)]
pub struct CreateCourseUseCase<R: CourseRepository> {
    repository: R,
}

impl<R: CourseRepository> CreateCourseUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateCourseUseCase for CreateCourseUseCase<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCourseCommand,
    ) -> Result<CourseResult, CreateCourseError> {
        self.repository
            .create_course(command.into_data())
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn cost_defaults_to_zero() {
        let command = CreateCourseCommand::new(
            "Алгоритмы".to_string(),
            "Базовый курс".to_string(),
            None,
        )
        .unwrap();

        assert_eq!(command.into_data().cost, Decimal::ZERO);
    }

    #[test]
    fn accepts_two_decimal_cost() {
        let command = CreateCourseCommand::new(
            "Алгоритмы".to_string(),
            "Базовый курс".to_string(),
            Some(Decimal::from_str("49.99").unwrap()),
        )
        .unwrap();

        assert_eq!(command.into_data().cost, Decimal::from_str("49.99").unwrap());
    }

    #[test]
    fn rejects_negative_cost() {
        let result = CreateCourseCommand::new(
            "Алгоритмы".to_string(),
            "Базовый курс".to_string(),
            Some(Decimal::from_str("-1").unwrap()),
        );

        assert!(matches!(result, Err(CreateCourseCommandError::NegativeCost)));
    }

    #[test]
    fn rejects_cost_beyond_six_digits() {
        let result = CreateCourseCommand::new(
            "Алгоритмы".to_string(),
            "Базовый курс".to_string(),
            Some(Decimal::from_str("10000.00").unwrap()),
        );

        assert!(matches!(result, Err(CreateCourseCommandError::CostTooLarge)));
    }

    #[test]
    fn rejects_sub_kopeck_precision() {
        let result = CreateCourseCommand::new(
            "Алгоритмы".to_string(),
            "Базовый курс".to_string(),
            Some(Decimal::from_str("49.999").unwrap()),
        );

        assert!(matches!(
            result,
            Err(CreateCourseCommandError::CostTooPrecise)
        ));
    }

    #[test]
    fn rejects_blank_title() {
        let result =
            CreateCourseCommand::new("  ".to_string(), "Базовый курс".to_string(), None);

        assert!(matches!(result, Err(CreateCourseCommandError::EmptyTitle)));
    }
}
