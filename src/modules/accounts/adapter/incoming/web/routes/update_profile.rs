use crate::accounts::application::use_cases::{UpdateProfileError, UpdateProfileInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for profile editing; absent fields are left untouched.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Age; values below 18 are rejected, absence changes nothing
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

#[patch("/api/accounts/{account_id}")]
pub async fn update_profile_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let account_id = path.into_inner();
    let req = payload.into_inner();

    let input = UpdateProfileInput {
        account_id,
        first_name: req.first_name,
        last_name: req.last_name,
        age: req.age,
        avatar_url: req.avatar_url,
    };

    match data.update_profile_use_case.execute(input).await {
        Ok(account) => ApiResponse::success(ProfileResponse {
            id: account.id.to_string(),
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            age: account.age,
            avatar_url: account.avatar_url,
        }),
        Err(err) => map_update_profile_error(err, account_id),
    }
}

fn map_update_profile_error(err: UpdateProfileError, account_id: Uuid) -> actix_web::HttpResponse {
    match err {
        UpdateProfileError::Underage(msg) => {
            warn!(%account_id, "Profile edit rejected by the age gate");
            ApiResponse::bad_request("UNDERAGE", &msg)
        }
        UpdateProfileError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        UpdateProfileError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
