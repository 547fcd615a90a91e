use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    news::application::ports::incoming::use_cases::{
        CreateNewsCommand, CreateNewsCommandError, CreateNewsError,
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
struct CreateNewsRequest {
    pub title: String,
    pub preamble: String,
    pub body: String,
    pub body_as_markdown: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/news")]
pub async fn create_news_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateNewsRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateNewsCommand::new(
        payload.title,
        payload.preamble,
        payload.body,
        payload.body_as_markdown.unwrap_or(false),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_news_use_case.execute(command).await {
        Ok(news) => ApiResponse::created(news),
        Err(CreateNewsError::DatabaseError(_)) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateNewsCommandError) -> actix_web::HttpResponse {
    match err {
        CreateNewsCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateNewsCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 256 characters")
        }
        CreateNewsCommandError::EmptyPreamble => {
            ApiResponse::bad_request("EMPTY_PREAMBLE", "Preamble cannot be empty")
        }
        CreateNewsCommandError::PreambleTooLong => ApiResponse::bad_request(
            "PREAMBLE_TOO_LONG",
            "Preamble must not exceed 512 characters",
        ),
    }
}
