use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    news::application::ports::incoming::use_cases::{
        UpdateNewsCommand, UpdateNewsCommandError, UpdateNewsError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateNewsRequest {
    pub title: Option<String>,
    pub preamble: Option<String>,
    pub body: Option<String>,
    pub body_as_markdown: Option<bool>,
}

#[patch("/api/news/{news_id}")]
pub async fn update_news_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateNewsRequest>,
) -> impl Responder {
    let news_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match UpdateNewsCommand::new(
        news_id,
        payload.title,
        payload.preamble,
        payload.body,
        payload.body_as_markdown,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.update_news_use_case.execute(command).await {
        Ok(news) => ApiResponse::success(news),
        Err(err) => map_update_news_error(err),
    }
}

fn map_command_error(err: UpdateNewsCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateNewsCommandError::EmptyPatch => {
            ApiResponse::bad_request("EMPTY_PATCH", "Nothing to update")
        }
        UpdateNewsCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        UpdateNewsCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 256 characters")
        }
        UpdateNewsCommandError::EmptyPreamble => {
            ApiResponse::bad_request("EMPTY_PREAMBLE", "Preamble cannot be empty")
        }
        UpdateNewsCommandError::PreambleTooLong => ApiResponse::bad_request(
            "PREAMBLE_TOO_LONG",
            "Preamble must not exceed 512 characters",
        ),
    }
}

fn map_update_news_error(err: UpdateNewsError) -> actix_web::HttpResponse {
    match err {
        UpdateNewsError::NewsNotFound => {
            ApiResponse::not_found("NEWS_NOT_FOUND", "News item not found")
        }
        UpdateNewsError::DatabaseError(_) => ApiResponse::internal_error(),
    }
}
