use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::news::application::ports::outgoing::{
    NewsListFilter, NewsQuery, NewsQueryError, NewsView,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct NewsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> NewsQueryError {
    NewsQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl NewsQuery for NewsQueryPostgres {
    async fn get_by_id(
        &self,
        news_id: Uuid,
        include_deleted: bool,
    ) -> Result<NewsView, NewsQueryError> {
        let mut query = Entity::find_by_id(news_id);

        if !include_deleted {
            query = query.filter(Column::IsDeleted.eq(false));
        }

        let model = query
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(NewsQueryError::NotFound)?;

        Ok(model.to_view())
    }

    async fn list(
        &self,
        filter: NewsListFilter,
        page: PageRequest,
    ) -> Result<PageResult<NewsView>, NewsQueryError> {
        let mut query = Entity::find();

        if let Some(deleted) = filter.deleted {
            query = query.filter(Column::IsDeleted.eq(deleted));
        }

        if let Some(from) = filter.created_from {
            query = query.filter(Column::CreatedAt.gte(from));
        }

        if let Some(to) = filter.created_to {
            query = query.filter(Column::CreatedAt.lte(to));
        }

        // ILIKE across everything the moderation search box covers
        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Preamble).ilike(&pattern))
                    .add(Expr::col(Column::Body).ilike(&pattern)),
            );
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
