use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{DateTime, Utc};
use zambool_auth::verify_token;
use zambool_core::AppError;
use zambool_models::{Claims, UserId, UserRole};

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn role(&self) -> Result<UserRole, AppError> {
        self.0
            .role
            .parse()
            .map_err(|_| AppError::forbidden("Invalid or expired token".to_string()))
    }

    /// When the token stops being accepted.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.0.exp)
            .ok()
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthorized("No token provided".to_string()))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_test_claims(role: &str) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            username: "ada".to_string(),
            name: "Ada Lovelace".to_string(),
            role: role.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_user_id() {
        let user_id = Uuid::new_v4();
        let claims = Claims {
            sub: user_id.to_string(),
            ..create_test_claims("student")
        };

        assert_eq!(AuthUser(claims).user_id().unwrap().into_inner(), user_id);
    }

    #[test]
    fn test_user_id_rejects_garbage_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            ..create_test_claims("student")
        };

        assert_eq!(AuthUser(claims).user_id().unwrap_err().status.as_u16(), 401);
    }

    #[test]
    fn test_role() {
        let auth_user = AuthUser(create_test_claims("instructor"));
        assert_eq!(auth_user.role().unwrap(), UserRole::Instructor);
        assert_eq!(auth_user.username(), "ada");
        assert_eq!(auth_user.name(), "Ada Lovelace");
    }

    #[test]
    fn test_unknown_role_is_forbidden() {
        let auth_user = AuthUser(create_test_claims("system_admin"));
        assert_eq!(auth_user.role().unwrap_err().status.as_u16(), 403);
    }

    #[test]
    fn test_expires_at() {
        let auth_user = AuthUser(create_test_claims("student"));
        assert_eq!(auth_user.expires_at().unwrap().timestamp(), 9999999999);
    }
}
