use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{
    CourseQuery, CourseQueryError, CourseView,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::courses::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CourseQueryError {
    CourseQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn get_by_id(
        &self,
        course_id: Uuid,
        include_deleted: bool,
    ) -> Result<CourseView, CourseQueryError> {
        let mut query = Entity::find_by_id(course_id);

        if !include_deleted {
            query = query.filter(Column::IsDeleted.eq(false));
        }

        let model = query
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CourseQueryError::NotFound)?;

        Ok(model.to_view())
    }

    async fn list(
        &self,
        include_deleted: bool,
        page: PageRequest,
    ) -> Result<PageResult<CourseView>, CourseQueryError> {
        let mut query = Entity::find();

        if !include_deleted {
            query = query.filter(Column::IsDeleted.eq(false));
        }

        query = query.order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: rows.iter().map(Model::to_view).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}
