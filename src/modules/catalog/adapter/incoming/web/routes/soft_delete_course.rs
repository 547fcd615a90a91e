use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    catalog::application::use_cases::SoftDeleteCourseError, shared::api::ApiResponse, AppState,
};

#[delete("/api/courses/{course_id}")]
pub async fn soft_delete_course_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.catalog.soft_delete_course.execute(course_id).await {
        Ok(_) => ApiResponse::no_content(),
        Err(SoftDeleteCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(SoftDeleteCourseError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
