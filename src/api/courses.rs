use crate::services::course_service;
use crate::state::AppState;
use crate::utils::{AppError, ErrorBody};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "Active courses, newest first"),
        (status = 500, description = "Store query failed", body = ErrorBody)
    )
)]
pub async fn list_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = course_service::list_active(&state).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "courses": courses
    })))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(
        ("id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Active course"),
        (status = 404, description = "Missing or inactive course", body = ErrorBody)
    )
)]
pub async fn get_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let course = course_service::get_active(&state, &id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "course": course
    })))
}
