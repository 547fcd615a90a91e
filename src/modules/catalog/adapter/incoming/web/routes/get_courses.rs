use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{shared::api::ApiResponse, shared::pagination::PageRequest, AppState};

#[derive(Debug, Deserialize)]
struct CourseListParams {
    /// Explicit escape hatch; the listing hides marked rows otherwise.
    pub include_deleted: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/courses")]
pub async fn get_courses_handler(
    data: web::Data<AppState>,
    params: web::Query<CourseListParams>,
) -> impl Responder {
    let include_deleted = params.include_deleted.unwrap_or(false);
    let page = PageRequest::from_params(params.page, params.per_page);

    match data.catalog.get_courses.execute(include_deleted, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(_) => ApiResponse::internal_error(),
    }
}
