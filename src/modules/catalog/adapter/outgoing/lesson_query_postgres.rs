use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{LessonQuery, LessonQueryError, LessonView};

use super::sea_orm_entity::lessons::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct LessonQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LessonQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LessonQuery for LessonQueryPostgres {
    async fn lessons_for_course(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<LessonView>, LessonQueryError> {
        let mut query = Entity::find().filter(Column::CourseId.eq(course_id));

        if !include_deleted {
            query = query.filter(Column::IsDeleted.eq(false));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| LessonQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Model::to_view).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn lesson_model(course_id: Uuid, num: i32, title: &str) -> Model {
        let now = Utc::now().fixed_offset();

        Model {
            id: Uuid::new_v4(),
            course_id,
            num,
            title: title.to_string(),
            description: "Описание урока".to_string(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn lessons_come_back_mapped_to_views() {
        let course_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                lesson_model(course_id, 2, "Сортировки"),
                lesson_model(course_id, 1, "Введение"),
            ]])
            .into_connection();

        let query = LessonQueryPostgres::new(Arc::new(db));

        let lessons = query.lessons_for_course(course_id, false).await.unwrap();

        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].course_id, course_id);
        assert_eq!(lessons[0].num, 2);
    }

    #[tokio::test]
    async fn empty_course_yields_empty_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let query = LessonQueryPostgres::new(Arc::new(db));

        let lessons = query
            .lessons_for_course(Uuid::new_v4(), false)
            .await
            .unwrap();

        assert!(lessons.is_empty());
    }
}
