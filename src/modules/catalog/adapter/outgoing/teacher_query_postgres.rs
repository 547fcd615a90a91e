use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    TeacherQuery, TeacherQueryError, TeacherView,
};

use super::sea_orm_entity::course_teacher_links;
use super::sea_orm_entity::course_teachers::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct TeacherQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TeacherQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TeacherQueryError {
    TeacherQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TeacherQuery for TeacherQueryPostgres {
    async fn teachers_for_course(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<TeacherView>, TeacherQueryError> {
        // Resolve the link table first, then load the teachers
        let teacher_ids = course_teacher_links::Entity::find()
            .filter(course_teacher_links::Column::CourseId.eq(course_id))
            .select_only()
            .column(course_teacher_links::Column::TeacherId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if teacher_ids.is_empty() {
            return Ok(vec![]);
        }

        let mut query = Entity::find().filter(Column::Id.is_in(teacher_ids));

        if !include_deleted {
            query = query.filter(Column::IsDeleted.eq(false));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(Model::to_view).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn course_without_teachers_short_circuits() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<BTreeMap<String, Value>>::new()])
            .into_connection();

        let query = TeacherQueryPostgres::new(Arc::new(db));

        let teachers = query
            .teachers_for_course(Uuid::new_v4(), false)
            .await
            .unwrap();

        assert!(teachers.is_empty());
    }

    #[tokio::test]
    async fn linked_teachers_come_back_as_views() {
        let teacher_id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // 1st query: link projection, one teacher_id column
            .append_query_results(vec![vec![BTreeMap::from([(
                "teacher_id".to_string(),
                Value::Uuid(Some(Box::new(teacher_id))),
            )])]])
            // 2nd query: the teachers themselves
            .append_query_results(vec![vec![Model {
                id: teacher_id,
                first_name: "Анна".to_string(),
                last_name: "Иванова".to_string(),
                is_deleted: false,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let query = TeacherQueryPostgres::new(Arc::new(db));

        let teachers = query
            .teachers_for_course(Uuid::new_v4(), false)
            .await
            .unwrap();

        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].id, teacher_id);
        assert_eq!(teachers[0].last_name, "Иванова");
    }
}
