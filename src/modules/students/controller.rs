use axum::{Json, extract::State};
use tracing::instrument;
use zambool_core::AppError;
use zambool_models::StudentSummary;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

use super::service::StudentService;

/// Every student with the codes of the courses they are enrolled in
#[utoipa::path(
    get,
    path = "/api/student-list",
    responses(
        (status = 200, description = "Students ordered by username", body = Vec<StudentSummary>),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn student_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentSummary>>, AppError> {
    let students = StudentService::list_students(&state.db).await?;
    Ok(Json(students))
}
