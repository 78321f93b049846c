//! Validators for free-text fields that are stored trimmed.

use validator::ValidationError;

/// Checks `value` the way it will be stored: surrounding whitespace removed,
/// between 1 and `max` characters.
pub(crate) fn trimmed_length(
    value: &str,
    max: usize,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();

    if length == 0 || length > max {
        return Err(ValidationError::new(code).with_message(message.into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(trimmed_length("  \t\n", 10, "x", "x").is_err());
    }

    #[test]
    fn test_upper_bound_ignores_surrounding_whitespace() {
        assert!(trimmed_length("   abc   ", 3, "x", "x").is_ok());
        assert!(trimmed_length("abcd", 3, "x", "x").is_err());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert!(trimmed_length("ééé", 3, "x", "x").is_ok());
    }
}
