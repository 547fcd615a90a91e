use crate::accounts::application::use_cases::{RegisterAccountError, RegisterAccountInput};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Request body for account registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterAccountRequest {
    /// Username (unique identifier)
    #[schema(example = "ivanpetrov")]
    pub username: String,

    /// Email address
    #[schema(example = "ivan@example.com")]
    pub email: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// First name
    #[schema(example = "Иван")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Петров")]
    pub last_name: String,

    /// Age; optional, but values below 18 are rejected
    #[schema(example = 30)]
    pub age: Option<i32>,

    /// Avatar image reference
    pub avatar_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredAccount {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Username
    #[schema(example = "ivanpetrov")]
    pub username: String,

    /// Email address
    #[schema(example = "ivan@example.com")]
    pub email: String,
}

fn map_register_account_error(err: RegisterAccountError, req: &RegisterAccountRequest) -> HttpResponse {
    match &err {
        RegisterAccountError::InvalidUsername(msg) => {
            warn!(
                username = %req.username,
                email = %req.email,
                "Invalid registration input"
            );
            ApiResponse::bad_request("INVALID_USERNAME", msg)
        }

        RegisterAccountError::InvalidEmail(msg) => {
            warn!(
                username = %req.username,
                email = %req.email,
                "Invalid registration input"
            );
            ApiResponse::bad_request("INVALID_EMAIL", msg)
        }

        RegisterAccountError::InvalidPassword(msg) => {
            warn!(
                username = %req.username,
                email = %req.email,
                "Invalid registration input"
            );
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }

        RegisterAccountError::Underage(msg) => {
            warn!(
                username = %req.username,
                age = ?req.age,
                "Registration rejected by the age gate"
            );
            ApiResponse::bad_request("UNDERAGE", msg)
        }

        RegisterAccountError::UsernameAlreadyExists => {
            warn!(username = %req.username, "Username already exists");
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", "Username already exists")
        }

        RegisterAccountError::EmailAlreadyExists => {
            warn!(email = %req.email, "Email already exists");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already exists")
        }

        other => {
            error!(
                username = %req.username,
                email = %req.email,
                error = ?other,
                "Unhandled registration error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Creates a new account. The age field is optional; when present it
/// must be 18 or higher.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "accounts",
    request_body = RegisterAccountRequest,
    responses(
        (
            status = 201,
            description = "Account created successfully",
            body = inline(SuccessResponse<RegisteredAccount>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "ivanpetrov",
                    "email": "ivan@example.com"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Underage" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "UNDERAGE",
                        "message": "Для использования ресурса вам должно быть больше 18 лет"
                    }
                }))),
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_EMAIL",
                        "message": "Invalid email format"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Username or email already taken",
            body = ErrorResponse
        )
    )
)]
#[post("/api/auth/register")]
pub async fn register_account_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterAccountRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let input = RegisterAccountInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        age: req.age,
        avatar_url: req.avatar_url.clone(),
    };

    match data.register_account_use_case.execute(input).await {
        Ok(account) => ApiResponse::created(RegisteredAccount {
            id: account.id.to_string(),
            username: account.username,
            email: account.email,
        }),
        Err(err) => map_register_account_error(err, &req),
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
