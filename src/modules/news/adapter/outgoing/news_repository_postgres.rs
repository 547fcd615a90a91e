use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::news::application::ports::outgoing::{
    CreateNewsData, NewsPatch, NewsRepository, NewsRepositoryError, NewsResult,
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as NewsActiveModel, Column, Entity as NewsEntity};

#[derive(Debug, Clone)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> NewsRepositoryError {
    match e {
        // A partial update against a missing id surfaces here.
        DbErr::RecordNotUpdated => NewsRepositoryError::NewsNotFound,
        other => NewsRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn create_news(&self, data: CreateNewsData) -> Result<NewsResult, NewsRepositoryError> {
        let active = NewsActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            preamble: Set(data.preamble),
            body: Set(data.body),
            body_as_markdown: Set(data.body_as_markdown),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_news(
        &self,
        news_id: Uuid,
        patch: NewsPatch,
    ) -> Result<NewsResult, NewsRepositoryError> {
        let mut active = NewsActiveModel {
            id: Set(news_id),
            ..Default::default()
        };

        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(preamble) = patch.preamble {
            active.preamble = Set(preamble);
        }
        if let Some(body) = patch.body {
            active.body = Set(body);
        }
        if let Some(markdown) = patch.body_as_markdown {
            active.body_as_markdown = Set(markdown);
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_repository_result())
    }

    async fn soft_delete_news(&self, news_id: Uuid) -> Result<(), NewsRepositoryError> {
        let active = NewsActiveModel {
            id: Set(news_id),
            is_deleted: Set(true),
            ..Default::default()
        };

        active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }

    async fn restore_news(&self, news_id: Uuid) -> Result<NewsResult, NewsRepositoryError> {
        let active = NewsActiveModel {
            id: Set(news_id),
            is_deleted: Set(false),
            ..Default::default()
        };

        let restored = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(restored.to_repository_result())
    }

    async fn mark_deleted_many(&self, news_ids: Vec<Uuid>) -> Result<u64, NewsRepositoryError> {
        // One statement for the whole selection; ActiveModel hooks are
        // intentionally not involved here.
        let result = NewsEntity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .filter(Column::Id.is_in(news_ids))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
