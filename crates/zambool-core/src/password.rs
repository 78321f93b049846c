use bcrypt::{DEFAULT_COST, hash, verify};
use validator::ValidationError;

use crate::errors::AppError;

/// Characters that satisfy the "special character" rule for new passwords.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*.";

pub const PASSWORD_MIN_LENGTH: usize = 8;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}

/// Password policy for new accounts: minimum length, at least one digit and
/// at least one character from [`PASSWORD_SPECIAL_CHARS`].
///
/// Usable directly as a `validator` custom function.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let message = if password.chars().count() < PASSWORD_MIN_LENGTH {
        "Password must be at least 8 characters long"
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        "Password must contain at least one number"
    } else if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        "Password must contain at least one special character"
    } else {
        return Ok(());
    };

    Err(ValidationError::new("password_strength").with_message(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_accepted() {
        assert!(validate_password_strength("abcdef1!").is_ok());
        assert!(validate_password_strength("correct.horse.battery.9").is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate_password_strength("ab1!").unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_password_without_digit_rejected() {
        let err = validate_password_strength("abcdefgh!").unwrap_err();
        assert_eq!(err.message.unwrap(), "Password must contain at least one number");
    }

    #[test]
    fn test_password_without_special_rejected() {
        let err = validate_password_strength("abcdefgh1").unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Password must contain at least one special character"
        );
    }
}
