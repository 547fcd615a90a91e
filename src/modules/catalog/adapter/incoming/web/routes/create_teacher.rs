use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    catalog::application::use_cases::{CreateTeacherCommand, CreateTeacherCommandError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
}

#[post("/api/teachers")]
pub async fn create_teacher_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTeacherRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateTeacherCommand::new(payload.first_name, payload.last_name) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.catalog.create_teacher.execute(command).await {
        Ok(teacher) => ApiResponse::created(teacher),
        Err(_) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: CreateTeacherCommandError) -> actix_web::HttpResponse {
    match err {
        CreateTeacherCommandError::EmptyFirstName => {
            ApiResponse::bad_request("EMPTY_FIRST_NAME", "First name cannot be empty")
        }
        CreateTeacherCommandError::EmptyLastName => {
            ApiResponse::bad_request("EMPTY_LAST_NAME", "Last name cannot be empty")
        }
        CreateTeacherCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 256 characters")
        }
    }
}
