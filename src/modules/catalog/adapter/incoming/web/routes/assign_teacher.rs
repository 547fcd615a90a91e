use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    catalog::application::use_cases::AssignTeacherError, shared::api::ApiResponse, AppState,
};

#[post("/api/courses/{course_id}/teachers/{teacher_id}")]
pub async fn assign_teacher_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (course_id, teacher_id) = path.into_inner();

    match data
        .catalog
        .assign_teacher
        .execute(course_id, teacher_id)
        .await
    {
        Ok(_) => ApiResponse::no_content(),
        Err(err) => map_assign_teacher_error(err),
    }
}

fn map_assign_teacher_error(err: AssignTeacherError) -> actix_web::HttpResponse {
    match err {
        AssignTeacherError::AlreadyAssigned => ApiResponse::conflict(
            "ALREADY_ASSIGNED",
            "Teacher is already assigned to this course",
        ),
        AssignTeacherError::CourseOrTeacherNotFound => {
            ApiResponse::not_found("LINK_TARGET_MISSING", "Course or teacher not found")
        }
        AssignTeacherError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
