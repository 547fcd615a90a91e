use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    news::application::ports::incoming::use_cases::RestoreNewsError, shared::api::ApiResponse,
    AppState,
};

/// Undo for moderation mistakes; only works because deletes are logical.
#[post("/api/news/{news_id}/restore")]
pub async fn restore_news_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let news_id = path.into_inner();

    match data.restore_news_use_case.execute(news_id).await {
        Ok(news) => ApiResponse::success(news),
        Err(err) => map_restore_news_error(err),
    }
}

fn map_restore_news_error(err: RestoreNewsError) -> actix_web::HttpResponse {
    match err {
        RestoreNewsError::NewsNotFound => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }
        RestoreNewsError::DatabaseError(_) => ApiResponse::internal_error(),
    }
}
