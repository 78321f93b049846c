use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use tracing::instrument;
use zambool_core::AppError;
use zambool_models::{Course, CourseId, CreateCourseDto, MessageResponse};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::CourseService;

/// List every course with its enrolled students and feedback
#[utoipa::path(
    get,
    path = "/api/course-list",
    responses(
        (status = 200, description = "All courses ordered by course code", body = Vec<Course>)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Create a course taught by an existing instructor
#[utoipa::path(
    post,
    path = "/api/add-course",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created successfully", body = MessageResponse),
        (status = 400, description = "Instructor does not exist or is ambiguous", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 409, description = "Course code already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn add_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    CourseService::create_course(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Course created successfully")),
    ))
}

/// Delete a course along with its enrollments and feedback
#[utoipa::path(
    delete,
    path = "/api/delete-course/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid course ID", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, id))]
pub async fn delete_course(
    State(state): State<AppState>,
    id: Result<Path<CourseId>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id.map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid course ID")))?;
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

/// Look up a course by its code
#[utoipa::path(
    get,
    path = "/api/search-course/{course_code}",
    params(
        ("course_code" = String, Path, description = "Course code, e.g. CS101")
    ),
    responses(
        (status = 200, description = "Course with its feedback", body = Course),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn search_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(course_code): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::find_by_code(&state.db, &course_code).await?;
    Ok(Json(course))
}

/// Courses taught by the caller
#[utoipa::path(
    get,
    path = "/api/instructor-courses",
    responses(
        (status = 200, description = "The caller's courses with feedback", body = Vec<Course>),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Instructor or admin only", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user.username = %auth_user.username()))]
pub async fn instructor_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::instructor_courses(&state.db, auth_user.username()).await?;
    Ok(Json(courses))
}
