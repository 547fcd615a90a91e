use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    CreateTeacherData, TeacherRepository, TeacherRepositoryError, TeacherResult,
};

use super::sea_orm_entity::{
    course_teacher_links::ActiveModel as LinkActiveModel,
    course_teachers::ActiveModel as TeacherActiveModel,
};

#[derive(Debug, Clone)]
pub struct TeacherRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TeacherRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_link_err(e: DbErr) -> TeacherRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TeacherRepositoryError::AlreadyAssigned,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            TeacherRepositoryError::LinkTargetMissing
        }
        _ => TeacherRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl TeacherRepository for TeacherRepositoryPostgres {
    async fn create_teacher(
        &self,
        data: CreateTeacherData,
    ) -> Result<TeacherResult, TeacherRepositoryError> {
        let active = TeacherActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| TeacherRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn assign_to_course(
        &self,
        course_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<(), TeacherRepositoryError> {
        let link = LinkActiveModel {
            course_id: Set(course_id),
            teacher_id: Set(teacher_id),
            ..Default::default()
        };

        link.insert(&*self.db).await.map_err(map_link_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::super::sea_orm_entity::course_teacher_links::Model as LinkModel;
    use super::super::sea_orm_entity::course_teachers::Model as TeacherModel;

    #[tokio::test]
    async fn create_teacher_returns_inserted_row() {
        let teacher_id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let inserted = TeacherModel {
            id: teacher_id,
            first_name: "Анна".to_string(),
            last_name: "Иванова".to_string(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted]])
            .into_connection();

        let repo = TeacherRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_teacher(CreateTeacherData {
                first_name: "Анна".to_string(),
                last_name: "Иванова".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, teacher_id);
        assert_eq!(result.first_name, "Анна");
    }

    #[tokio::test]
    async fn assign_inserts_one_link_row() {
        let course_id = Uuid::new_v4();
        let teacher_id = Uuid::new_v4();

        let link = LinkModel {
            course_id,
            teacher_id,
            created_at: Utc::now().fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![link]])
            .into_connection();

        let repo = TeacherRepositoryPostgres::new(Arc::new(db));

        let result = repo.assign_to_course(course_id, teacher_id).await;

        assert!(result.is_ok());
    }
}
