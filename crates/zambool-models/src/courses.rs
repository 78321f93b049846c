//! Course models and the enrollment decision rules.
//!
//! A [`Course`] row is read together with its enrolled usernames and its
//! feedback contents, so one struct answers both "who is in this course" and
//! "what did students say about it". The rules that guard enrollment and
//! feedback live here as pure functions; services apply them while holding a
//! lock on the course row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::ids::CourseId;
use crate::text::trimmed_length;

pub const COURSE_CODE_MAX_LENGTH: usize = 20;
pub const COURSE_NAME_MAX_LENGTH: usize = 200;

fn validate_course_name(name: &str) -> Result<(), ValidationError> {
    trimmed_length(
        name,
        COURSE_NAME_MAX_LENGTH,
        "course_name_length",
        "Course name must be between 1 and 200 characters",
    )
}

fn validate_course_code(code: &str) -> Result<(), ValidationError> {
    trimmed_length(
        code,
        COURSE_CODE_MAX_LENGTH,
        "course_code_length",
        "Course code must be between 1 and 20 characters",
    )
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    /// Human-facing course code, e.g. `CS101`.
    #[serde(rename = "courseId")]
    pub course_code: String,
    pub name: String,
    pub instructor_username: String,
    /// Instructor display name captured when the course was created.
    #[serde(rename = "instructor")]
    pub instructor_name: String,
    pub capacity: i32,
    /// Enrolled student usernames, in enrollment order.
    pub students_enrolled: Vec<String>,
    /// Feedback contents, in submission order.
    pub feedback: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Outcome of checking whether a student may take a seat in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentCheck {
    Eligible,
    AlreadyEnrolled,
    Full,
}

impl Course {
    pub fn is_enrolled(&self, username: &str) -> bool {
        self.students_enrolled.iter().any(|s| s == username)
    }

    pub fn seats_taken(&self) -> usize {
        self.students_enrolled.len()
    }

    pub fn is_full(&self) -> bool {
        self.seats_taken() >= usize::try_from(self.capacity).unwrap_or(0)
    }

    /// Duplicate enrollment is reported before capacity, so an enrolled
    /// student asking again in a full course hears "already enrolled".
    pub fn enrollment_check(&self, username: &str) -> EnrollmentCheck {
        if self.is_enrolled(username) {
            EnrollmentCheck::AlreadyEnrolled
        } else if self.is_full() {
            EnrollmentCheck::Full
        } else {
            EnrollmentCheck::Eligible
        }
    }

    /// Only students currently enrolled may leave feedback.
    pub fn accepts_feedback_from(&self, username: &str) -> bool {
        self.is_enrolled(username)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(custom(function = "validate_course_name"))]
    #[schema(example = "Intro to Computer Science")]
    pub course_name: String,
    #[validate(custom(function = "validate_course_code"))]
    #[schema(example = "CS101")]
    pub course_code: String,
    /// Instructor username, or display name when it is unambiguous.
    #[validate(length(min = 1, message = "Instructor is required"))]
    #[schema(example = "grace")]
    pub course_instructor: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    #[schema(example = 30)]
    pub course_capacity: i32,
}

/// Student self-enrollment.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentEnrollDto {
    #[validate(length(min = 1, message = "Course code is required"))]
    #[schema(example = "CS101")]
    pub course_code: String,
}

/// Admin enrollment of a student by username.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminEnrollDto {
    /// Course code.
    #[serde(rename = "courseId")]
    #[validate(length(min = 1, message = "Course code is required"))]
    #[schema(example = "CS101")]
    pub course_code: String,
    /// Student username.
    #[serde(rename = "studentId")]
    #[validate(length(min = 1, message = "Student username is required"))]
    #[schema(example = "ada.lovelace")]
    pub student_username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn course(capacity: i32, enrolled: &[&str]) -> Course {
        Course {
            id: CourseId::new(),
            course_code: "CS101".to_string(),
            name: "Intro".to_string(),
            instructor_username: "grace".to_string(),
            instructor_name: "Grace Hopper".to_string(),
            capacity,
            students_enrolled: enrolled.iter().map(|s| s.to_string()).collect(),
            feedback: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_course_is_eligible() {
        assert_eq!(
            course(2, &["ada"]).enrollment_check("alan"),
            EnrollmentCheck::Eligible
        );
    }

    #[test]
    fn test_full_course_rejects_newcomer() {
        assert_eq!(
            course(2, &["ada", "alan"]).enrollment_check("grace"),
            EnrollmentCheck::Full
        );
    }

    #[test]
    fn test_duplicate_reported_before_full() {
        assert_eq!(
            course(1, &["ada"]).enrollment_check("ada"),
            EnrollmentCheck::AlreadyEnrolled
        );
    }

    #[test]
    fn test_over_enrolled_course_is_full() {
        // Admin enrollment may exceed capacity.
        let c = course(1, &["ada", "alan"]);
        assert!(c.is_full());
        assert_eq!(c.seats_taken(), 2);
    }

    #[test]
    fn test_feedback_requires_enrollment() {
        let c = course(5, &["ada"]);
        assert!(c.accepts_feedback_from("ada"));
        assert!(!c.accepts_feedback_from("alan"));
    }

    #[test]
    fn test_wire_names_match_client() {
        let json = serde_json::to_value(course(3, &["ada"])).unwrap();
        assert_eq!(json["courseId"], "CS101");
        assert_eq!(json["instructor"], "Grace Hopper");
        assert_eq!(json["instructorUsername"], "grace");
        assert_eq!(json["studentsEnrolled"][0], "ada");
        assert!(json.get("course_code").is_none());
    }

    #[test]
    fn test_create_course_dto_from_client_body() {
        let dto: CreateCourseDto = serde_json::from_str(
            r#"{"courseName":"Compilers","courseCode":"CS420","courseInstructor":"grace","courseCapacity":25}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.course_code, "CS420");
    }

    #[test]
    fn test_create_course_dto_rejects_zero_capacity() {
        let dto = CreateCourseDto {
            course_name: "Compilers".to_string(),
            course_code: "CS420".to_string(),
            course_instructor: "grace".to_string(),
            course_capacity: 0,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("course_capacity"));
    }

    fn create_dto(name: &str, code: &str) -> CreateCourseDto {
        CreateCourseDto {
            course_name: name.to_string(),
            course_code: code.to_string(),
            course_instructor: "grace".to_string(),
            course_capacity: 10,
        }
    }

    #[test]
    fn test_create_course_dto_rejects_blank_name_and_code() {
        let errors = create_dto("   ", " \t ").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("course_name"));
        assert!(errors.field_errors().contains_key("course_code"));
    }

    #[test]
    fn test_create_course_dto_bounds_apply_to_trimmed_value() {
        let padded_code = format!("  {}  ", "C".repeat(COURSE_CODE_MAX_LENGTH));
        assert!(create_dto("Compilers", &padded_code).validate().is_ok());

        let long_code = "C".repeat(COURSE_CODE_MAX_LENGTH + 1);
        assert!(create_dto("Compilers", &long_code).validate().is_err());

        let long_name = "n".repeat(COURSE_NAME_MAX_LENGTH + 1);
        assert!(create_dto(&long_name, "CS420").validate().is_err());
    }

    #[test]
    fn test_admin_enroll_dto_field_names() {
        let dto: AdminEnrollDto =
            serde_json::from_str(r#"{"courseId":"CS101","studentId":"ada"}"#).unwrap();
        assert_eq!(dto.course_code, "CS101");
        assert_eq!(dto.student_username, "ada");
    }
}
