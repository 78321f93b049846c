//! Admin account bootstrap.
//!
//! Signup refuses the admin role, so this is the only way an admin account
//! comes into existence.

use sqlx::PgPool;
use validator::ValidationError;
use zambool_core::{hash_password, validate_password_strength};
use zambool_models::auth::validate_username;
use zambool_models::{UserId, UserRole};

fn describe(err: ValidationError) -> String {
    err.message
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

/// Checks the same username, name and password rules signup enforces.
pub fn validate_admin_input(username: &str, name: &str, password: &str) -> Result<(), String> {
    if !(3..=50).contains(&username.chars().count()) {
        return Err("Username must be between 3 and 50 characters".to_string());
    }
    validate_username(username).map_err(describe)?;

    if name.trim().is_empty() || name.chars().count() > 100 {
        return Err("Name must be between 1 and 100 characters".to_string());
    }

    validate_password_strength(password).map_err(describe)
}

/// Creates an admin account and returns its id.
pub async fn create_admin(
    db: &PgPool,
    username: &str,
    name: &str,
    password: &str,
) -> Result<UserId, Box<dyn std::error::Error>> {
    validate_admin_input(username, name, password)?;

    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (username, password, name, role)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (username) DO NOTHING
         RETURNING id",
    )
    .bind(username)
    .bind(&hashed_password)
    .bind(name.trim())
    .bind(UserRole::Admin)
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| "User with this username already exists".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_admin_input() {
        assert!(validate_admin_input("root.admin", "Root", "sup3r.secret").is_ok());
    }

    #[test]
    fn test_admin_input_rejects_weak_password() {
        let err = validate_admin_input("root.admin", "Root", "short").unwrap_err();
        assert_eq!(err, "Password must be at least 8 characters long");
    }

    #[test]
    fn test_admin_input_rejects_bad_username() {
        assert!(validate_admin_input("ro", "Root", "sup3r.secret").is_err());
        assert!(validate_admin_input("root admin", "Root", "sup3r.secret").is_err());
    }

    #[test]
    fn test_admin_input_rejects_blank_name() {
        assert!(validate_admin_input("root.admin", "  ", "sup3r.secret").is_err());
    }
}
