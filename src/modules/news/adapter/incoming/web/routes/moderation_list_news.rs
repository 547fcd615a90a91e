use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    news::application::ports::outgoing::{NewsListFilter, NewsView},
    shared::api::ApiResponse,
    shared::pagination::{PageRequest, PageResult},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ModerationListParams {
    /// `true` → only deleted rows, `false` → only active rows,
    /// absent → everything.
    pub deleted: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ModerationNewsRow {
    pub id: Uuid,
    pub label: String,
    pub title: String,
    pub slug: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

impl From<NewsView> for ModerationNewsRow {
    fn from(view: NewsView) -> Self {
        Self {
            id: view.id,
            label: view.label(),
            slug: slugify(&view.title),
            deleted: view.lifecycle.deleted,
            created_at: view.lifecycle.created_at,
            title: view.title,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Moderation listing: 10 rows per page unless asked otherwise, flag
/// and creation-date filters, substring search across title, preamble
/// and body.
#[get("/api/admin/news")]
pub async fn moderation_list_news_handler(
    data: web::Data<AppState>,
    params: web::Query<ModerationListParams>,
) -> impl Responder {
    let params = params.into_inner();

    let filter = NewsListFilter {
        deleted: params.deleted,
        created_from: params.created_from,
        created_to: params.created_to,
        search: params.search,
    };
    let page = PageRequest::from_params(params.page, params.per_page);

    match data.get_news_list_use_case.execute(filter, page).await {
        Ok(result) => {
            let rows = PageResult {
                items: result
                    .items
                    .into_iter()
                    .map(ModerationNewsRow::from)
                    .collect::<Vec<_>>(),
                page: result.page,
                per_page: result.per_page,
                total: result.total,
            };
            ApiResponse::success(rows)
        }
        Err(_) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_lowercased_and_dashed() {
        assert_eq!(slugify("Свежие Новости"), "свежие-новости");
        assert_eq!(slugify("Breaking News Today"), "breaking-news-today");
    }
}
