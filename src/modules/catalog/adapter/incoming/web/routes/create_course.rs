use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::application::use_cases::{CreateCourseCommand, CreateCourseCommandError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub cost: Option<Decimal>,
}

#[post("/api/courses")]
pub async fn create_course_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateCourseRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command =
        match CreateCourseCommand::new(payload.title, payload.description, payload.cost) {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

    match data.catalog.create_course.execute(command).await {
        Ok(course) => ApiResponse::created(course),
        Err(_) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: CreateCourseCommandError) -> actix_web::HttpResponse {
    match err {
        CreateCourseCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateCourseCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 256 characters")
        }
        CreateCourseCommandError::NegativeCost => {
            ApiResponse::bad_request("NEGATIVE_COST", "Cost cannot be negative")
        }
        CreateCourseCommandError::CostTooLarge => {
            ApiResponse::bad_request("COST_TOO_LARGE", "Cost must not exceed 9999.99")
        }
        CreateCourseCommandError::CostTooPrecise => ApiResponse::bad_request(
            "COST_TOO_PRECISE",
            "Cost supports at most two fractional digits",
        ),
    }
}
