use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
struct FeedbackListParams {
    pub include_deleted: Option<bool>,
}

#[get("/api/courses/{course_id}/feedback")]
pub async fn get_course_feedback_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    params: web::Query<FeedbackListParams>,
) -> impl Responder {
    let course_id = path.into_inner();
    let include_deleted = params.include_deleted.unwrap_or(false);

    match data
        .catalog
        .get_course_feedback
        .execute(course_id, include_deleted)
        .await
    {
        Ok(feedback) => ApiResponse::success(feedback),
        Err(_) => ApiResponse::internal_error(),
    }
}
