//! Role-based authorization middleware for Axum
//!
//! Route groups are guarded with `axum::middleware::from_fn_with_state` and one
//! of the `require_*` functions below. Handlers behind a guard still take an
//! [`AuthUser`] to learn who the caller is.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use zambool_core::AppError;
use zambool_models::UserRole;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Middleware function that checks if the authenticated user has one of the required roles.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::role::require_roles;
///
/// let protected_routes = Router::new()
///     .route("/grading", get(handler))
///     .layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_roles(state, req, next, &[UserRole::Instructor])
///     ));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[UserRole],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, allowed_roles).inspect_err(|_| {
        tracing::warn!(
            username = %auth_user.username(),
            role = %auth_user.0.role,
            "Role check failed"
        );
    })?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Admin-only routes: course management and enrollment administration.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &[UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Student-only routes: self-enrollment, own courses, feedback.
pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &[UserRole::Student]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Instructor routes. Admins may open them too.
pub async fn require_instructor(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        &[UserRole::Instructor, UserRole::Admin],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Check that the caller has exactly this role
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    check_any_role(auth_user, &[required_role])
}

/// Check that the caller has one of the allowed roles
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let user_role = parse_role_from_string(&auth_user.0.role)?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required role: {}",
            role_list(allowed_roles)
        )));
    }

    Ok(())
}

/// Parse the role claim of a token
pub fn parse_role_from_string(role_str: &str) -> Result<UserRole, AppError> {
    role_str
        .parse()
        .map_err(|e: zambool_models::users::UnknownRole| AppError::forbidden(e.to_string()))
}

fn role_list(roles: &[UserRole]) -> String {
    roles
        .iter()
        .map(UserRole::as_str)
        .collect::<Vec<_>>()
        .join(" or ")
}
