//! User domain models and role definitions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::ids::UserId;

/// The three account kinds. Stored as the Postgres enum `user_role`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    /// The client view a freshly logged-in user lands on.
    pub const fn home_view(&self) -> View {
        match self {
            Self::Student => View::Enrollment,
            Self::Instructor => View::Courses,
            Self::Admin => View::ManageEnrollment,
        }
    }

    /// Every client view this role may open.
    pub fn views(&self) -> Vec<View> {
        match self {
            Self::Student => vec![View::Enrollment, View::Feedback],
            Self::Instructor => vec![View::Courses, View::Feedback],
            Self::Admin => vec![View::ManageEnrollment],
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Client-side views, as named in the frontend routes under `/home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Enrollment,
    Courses,
    ManageEnrollment,
    Feedback,
}

/// A user account. The password hash is never part of this struct.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Row used only by login, where the hash must be compared.
#[derive(FromRow, Debug)]
pub struct UserWithPassword {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [UserRole::Student, UserRole::Instructor, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("system_admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_unknown_role_message() {
        let err = "teacher".parse::<UserRole>().unwrap_err();
        assert_eq!(err, UnknownRole("teacher".to_string()));
        assert_eq!(err.to_string(), "Invalid role: teacher");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Instructor).unwrap(),
            "\"instructor\""
        );
    }

    #[test]
    fn test_home_view_is_among_views() {
        for role in [UserRole::Student, UserRole::Instructor, UserRole::Admin] {
            assert!(role.views().contains(&role.home_view()));
        }
    }

    #[test]
    fn test_view_names_match_client_routes() {
        assert_eq!(
            serde_json::to_string(&View::ManageEnrollment).unwrap(),
            "\"manage-enrollment\""
        );
        assert_eq!(serde_json::to_string(&View::Courses).unwrap(), "\"courses\"");
    }
}
