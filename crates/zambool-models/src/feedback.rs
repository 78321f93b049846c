use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::text::trimmed_length;

pub const FEEDBACK_MAX_LENGTH: usize = 2000;

fn validate_feedback_content(content: &str) -> Result<(), ValidationError> {
    trimmed_length(
        content,
        FEEDBACK_MAX_LENGTH,
        "feedback_length",
        "Feedback must be between 1 and 2000 characters",
    )
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFeedbackDto {
    /// Course code.
    #[serde(rename = "courseId")]
    #[validate(length(min = 1, message = "Course code is required"))]
    #[schema(example = "CS101")]
    pub course_code: String,
    #[validate(custom(function = "validate_feedback_content"))]
    #[schema(example = "Great pacing, more exercises please.")]
    pub content: String,
}

impl AddFeedbackDto {
    /// Content as stored: surrounding whitespace removed.
    pub fn trimmed_content(&self) -> &str {
        self.content.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(content: &str) -> AddFeedbackDto {
        AddFeedbackDto {
            course_code: "CS101".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_whitespace_only_feedback_rejected() {
        let errors = dto("   \n\t").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_feedback_length_limit() {
        assert!(dto(&"a".repeat(FEEDBACK_MAX_LENGTH)).validate().is_ok());
        assert!(dto(&"a".repeat(FEEDBACK_MAX_LENGTH + 1)).validate().is_err());
    }

    #[test]
    fn test_trimmed_content() {
        assert_eq!(dto("  loved it \n").trimmed_content(), "loved it");
    }

    #[test]
    fn test_client_field_names() {
        let dto: AddFeedbackDto =
            serde_json::from_str(r#"{"courseId":"CS101","content":"ok"}"#).unwrap();
        assert_eq!(dto.course_code, "CS101");
    }
}
