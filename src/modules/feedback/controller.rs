use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use zambool_core::AppError;
use zambool_models::{AddFeedbackDto, MessageResponse};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::FeedbackService;

/// Leave feedback on a course the caller is enrolled in
#[utoipa::path(
    post,
    path = "/api/add-feedback",
    request_body = AddFeedbackDto,
    responses(
        (status = 201, description = "Feedback added successfully", body = MessageResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Student only, or not enrolled in this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Feedback",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(user.username = %auth_user.username(), course.code = %dto.course_code))]
pub async fn add_feedback(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<AddFeedbackDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    FeedbackService::add_feedback(
        &state.db,
        auth_user.username(),
        &dto.course_code,
        dto.trimmed_content(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Feedback added successfully")),
    ))
}
