use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    catalog::application::use_cases::GetSingleCourseError, shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
struct SingleCourseParams {
    pub include_deleted: Option<bool>,
}

#[get("/api/courses/{course_id}")]
pub async fn get_single_course_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    params: web::Query<SingleCourseParams>,
) -> impl Responder {
    let course_id = path.into_inner();
    let include_deleted = params.include_deleted.unwrap_or(false);

    match data
        .catalog
        .get_single_course
        .execute(course_id, include_deleted)
        .await
    {
        Ok(course) => ApiResponse::success(course),
        Err(GetSingleCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(GetSingleCourseError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
