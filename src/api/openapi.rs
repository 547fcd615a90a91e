use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::accounts::adapter::incoming::web::routes::{
    ProfileResponse, RegisterAccountRequest, RegisteredAccount, UpdateProfileRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Backend API",
        version = "1.0.0",
        description = "News feed, course catalog and account management"
    ),
    paths(
        // Account endpoints
        crate::accounts::adapter::incoming::web::routes::register_account::register_account_handler,

        // News endpoints
        // create_news_handler,
        // get_news_feed_handler,
        // moderation_list_news_handler,
        // bulk_delete_news_handler,

        // Catalog endpoints
        // create_course_handler,
        // get_courses_handler,
        // create_lesson_handler,
        // create_feedback_handler,
    ),
    components(
        schemas(
            RegisterAccountRequest,
            RegisteredAccount,
            UpdateProfileRequest,
            ProfileResponse,
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "accounts", description = "Registration and profile management")
    )
)]
pub struct ApiDoc;
