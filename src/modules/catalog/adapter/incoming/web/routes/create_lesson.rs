use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    catalog::application::use_cases::{
        CreateLessonCommand, CreateLessonCommandError, CreateLessonError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateLessonRequest {
    pub num: Option<i32>,
    pub title: String,
    pub description: String,
}

#[post("/api/courses/{course_id}/lessons")]
pub async fn create_lesson_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CreateLessonRequest>,
) -> impl Responder {
    let course_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match CreateLessonCommand::new(
        course_id,
        payload.num,
        payload.title,
        payload.description,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.catalog.create_lesson.execute(command).await {
        Ok(lesson) => ApiResponse::created(lesson),
        Err(CreateLessonError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(CreateLessonError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: CreateLessonCommandError) -> actix_web::HttpResponse {
    match err {
        CreateLessonCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateLessonCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 256 characters")
        }
        CreateLessonCommandError::NegativeNum => {
            ApiResponse::bad_request("NEGATIVE_NUM", "Lesson number cannot be negative")
        }
    }
}
