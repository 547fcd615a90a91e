use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    news::application::ports::outgoing::NewsListFilter, shared::api::ApiResponse,
    shared::pagination::PageRequest, AppState,
};

#[derive(Debug, Deserialize)]
struct FeedParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// The public feed: soft-deleted rows never show up here, whatever the
/// moderation screen is doing.
#[get("/api/news")]
pub async fn get_news_feed_handler(
    data: web::Data<AppState>,
    params: web::Query<FeedParams>,
) -> impl Responder {
    let page = PageRequest::from_params(params.page, params.per_page);

    match data
        .get_news_list_use_case
        .execute(NewsListFilter::active_only(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(_) => ApiResponse::internal_error(),
    }
}
