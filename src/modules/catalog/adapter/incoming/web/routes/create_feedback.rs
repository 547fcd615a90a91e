use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    catalog::application::use_cases::{
        CreateFeedbackCommand, CreateFeedbackCommandError, CreateFeedbackError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreateFeedbackRequest {
    pub user_id: Uuid,
    /// 1..=5; omitted means five stars
    pub rating: Option<i16>,
    pub feedback: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/courses/{course_id}/feedback")]
pub async fn create_feedback_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CreateFeedbackRequest>,
) -> impl Responder {
    let course_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match CreateFeedbackCommand::new(
        course_id,
        payload.user_id,
        payload.rating,
        payload.feedback,
    ) {
        Ok(cmd) => cmd,
        Err(CreateFeedbackCommandError::InvalidRating) => {
            return ApiResponse::bad_request("INVALID_RATING", "Rating must be between 1 and 5")
        }
    };

    match data.catalog.create_feedback.execute(command).await {
        Ok(feedback) => ApiResponse::created(feedback),
        Err(CreateFeedbackError::CourseOrAccountNotFound) => {
            ApiResponse::not_found("PARENT_MISSING", "Course or account not found")
        }
        Err(CreateFeedbackError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
