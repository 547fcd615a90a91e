use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    accounts::application::use_cases::FetchProfileError, shared::api::ApiResponse, AppState,
};

#[get("/api/accounts/{account_id}")]
pub async fn get_profile_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let account_id = path.into_inner();

    match data.fetch_profile_use_case.execute(account_id).await {
        Ok(account) => ApiResponse::success(account),
        Err(FetchProfileError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(FetchProfileError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
