use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::instrument;
use zambool_core::AppError;
use zambool_models::{AdminEnrollDto, Course, CourseId, MessageResponse, StudentEnrollDto};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::{EnrollmentOutcome, EnrollmentService};

/// Enroll the calling student in a course
#[utoipa::path(
    post,
    path = "/api/student-enrollment",
    request_body = StudentEnrollDto,
    responses(
        (status = 200, description = "Enrolled, or already enrolled", body = MessageResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Student only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 409, description = "Course is full", body = ErrorResponse)
    ),
    tag = "Enrollments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(user.username = %auth_user.username(), course.code = %dto.course_code))]
pub async fn student_enrollment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<StudentEnrollDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome =
        EnrollmentService::enroll_self(&state.db, auth_user.username(), &dto.course_code).await?;

    let message = match outcome {
        EnrollmentOutcome::Enrolled => "You have been enrolled successfully!",
        EnrollmentOutcome::AlreadyEnrolled => "You are already enrolled in the course",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Courses the calling student is enrolled in
#[utoipa::path(
    get,
    path = "/api/student-courses",
    responses(
        (status = 200, description = "The caller's courses", body = Vec<Course>),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Student only", body = ErrorResponse)
    ),
    tag = "Enrollments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user.username = %auth_user.username()))]
pub async fn student_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = EnrollmentService::student_courses(&state.db, auth_user.username()).await?;
    Ok(Json(courses))
}

/// Enroll a student in a course on their behalf
#[utoipa::path(
    post,
    path = "/api/enroll-student",
    request_body = AdminEnrollDto,
    responses(
        (status = 200, description = "Enrolled, or already enrolled", body = MessageResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Course or student not found", body = ErrorResponse)
    ),
    tag = "Enrollments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto), fields(course.code = %dto.course_code, student = %dto.student_username))]
pub async fn enroll_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AdminEnrollDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome =
        EnrollmentService::enroll_student(&state.db, dto.student_username.trim(), &dto.course_code)
            .await?;

    let message = match outcome {
        EnrollmentOutcome::Enrolled => "Student enrolled successfully",
        EnrollmentOutcome::AlreadyEnrolled => "Student is already enrolled in the course",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Remove a student from a course
#[utoipa::path(
    delete,
    path = "/api/remove-student/{id}/{username}",
    params(
        ("id" = uuid::Uuid, Path, description = "Course ID"),
        ("username" = String, Path, description = "Student username")
    ),
    responses(
        (status = 200, description = "Student removed successfully", body = MessageResponse),
        (status = 400, description = "Invalid course ID", body = ErrorResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Course not found or student not in it", body = ErrorResponse)
    ),
    tag = "Enrollments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, path))]
pub async fn remove_student(
    State(state): State<AppState>,
    path: Result<Path<(CourseId, String)>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path((course_id, username)) =
        path.map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid course ID")))?;

    EnrollmentService::remove_student(&state.db, course_id, &username).await?;
    Ok(Json(MessageResponse::new("Student removed successfully")))
}
