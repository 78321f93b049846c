//! Signup, login and session models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use zambool_core::validate_password_strength;

use crate::ids::UserId;
use crate::text::trimmed_length;
use crate::users::{User, UserRole, View};

pub use zambool_auth::Claims;

/// Usernames are login handles and soft references from courses, so they
/// are restricted to characters that survive URLs unescaped.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if !valid_chars {
        return Err(ValidationError::new("username_charset").with_message(
            "Username may only contain letters, digits, '.', '_' and '-'".into(),
        ));
    }

    Ok(())
}

pub const NAME_MAX_LENGTH: usize = 100;

/// Display names are stored trimmed.
fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    trimmed_length(
        name,
        NAME_MAX_LENGTH,
        "name_length",
        "Name must be between 1 and 100 characters",
    )
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"),
        custom(function = "validate_username")
    )]
    #[schema(example = "ada.lovelace")]
    pub username: String,
    #[validate(custom(function = "validate_password_strength"))]
    #[schema(example = "analytical1!")]
    pub password: String,
    #[validate(custom(function = "validate_display_name"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "analytical1!")]
    pub password: String,
}

/// Identity returned to the client after login; stored client-side as the
/// user info that drives view switching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for LoginUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Who the bearer of a token is and which views they may open.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: LoginUser,
    pub home: View,
    pub views: Vec<View>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
