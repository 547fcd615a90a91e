use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError, CourseResult, CreateCourseData,
};

// SeaORM entity imports
use super::sea_orm_entity::courses::{ActiveModel as CourseActiveModel, Entity as Courses};

#[derive(Debug, Clone)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    match e {
        DbErr::RecordNotUpdated => CourseRepositoryError::CourseNotFound,
        other => CourseRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create_course(
        &self,
        data: CreateCourseData,
    ) -> Result<CourseResult, CourseRepositoryError> {
        let active = CourseActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            cost: Set(data.cost),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn soft_delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let active = CourseActiveModel {
            id: Set(course_id),
            is_deleted: Set(true),
            ..Default::default()
        };

        active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }

    async fn hard_delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        // The FKs on lessons, feedback and links cascade on their own.
        let result = Courses::delete_by_id(course_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CourseRepositoryError::CourseNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::str::FromStr;

    use super::super::sea_orm_entity::courses::Model as CourseModel;

    fn course_model(id: Uuid, title: &str, cost: &str, is_deleted: bool) -> CourseModel {
        let now = Utc::now().fixed_offset();

        CourseModel {
            id,
            title: title.to_string(),
            description: "Описание".to_string(),
            cost: Decimal::from_str(cost).unwrap(),
            is_deleted,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_course_returns_inserted_row() {
        let course_id = Uuid::new_v4();
        let inserted = course_model(course_id, "Алгоритмы", "49.99", false);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_course(CreateCourseData {
                title: "Алгоритмы".to_string(),
                description: "Описание".to_string(),
                cost: Decimal::from_str("49.99").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, course_id);
        assert_eq!(result.cost, Decimal::from_str("49.99").unwrap());
    }

    #[tokio::test]
    async fn hard_delete_missing_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));

        let result = repo.hard_delete_course(Uuid::new_v4()).await;

        assert!(matches!(result, Err(CourseRepositoryError::CourseNotFound)));
    }

    #[tokio::test]
    async fn hard_delete_removes_one_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));

        let result = repo.hard_delete_course(Uuid::new_v4()).await;

        assert!(result.is_ok());
    }
}
