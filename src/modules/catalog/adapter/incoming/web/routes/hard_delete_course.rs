use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::{
    catalog::application::use_cases::HardDeleteCourseError, shared::api::ApiResponse, AppState,
};

/// Irreversible, unlike the plain DELETE: the row goes away and the
/// cascade takes the course's lessons, feedback and teacher links with
/// it.
#[delete("/api/courses/{course_id}/purge")]
pub async fn hard_delete_course_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.catalog.hard_delete_course.execute(course_id).await {
        Ok(_) => {
            info!(%course_id, "Course purged");
            ApiResponse::no_content()
        }
        Err(HardDeleteCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(HardDeleteCourseError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
