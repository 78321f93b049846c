use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;
use zambool_core::AppError;
use zambool_models::{LoginRequest, LoginResponse, MessageResponse, SessionResponse, SignupRequest};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

/// Body of every error response.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Create a student or instructor account
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 400, description = "Malformed body or missing field", body = ErrorResponse),
        (status = 403, description = "Admin accounts can only be created from the CLI", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    AuthService::signup(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// Login and receive a session token
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body or missing field", body = ErrorResponse),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Identity of the token holder and the views their role may open
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "No token provided", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(user.username = %auth_user.username()))]
pub async fn session(auth_user: AuthUser) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(AuthService::session(&auth_user.0)?))
}
