use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use zambool_models::{
    AddFeedbackDto, AdminEnrollDto, Course, CreateCourseDto, LoginRequest, LoginResponse,
    LoginUser, MessageResponse, SessionResponse, SignupRequest, StudentEnrollDto, StudentSummary,
    UserRole, View,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::session,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::add_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::search_course,
        crate::modules::courses::controller::instructor_courses,
        crate::modules::enrollments::controller::student_enrollment,
        crate::modules::enrollments::controller::student_courses,
        crate::modules::enrollments::controller::enroll_student,
        crate::modules::enrollments::controller::remove_student,
        crate::modules::students::controller::student_list,
        crate::modules::feedback::controller::add_feedback,
    ),
    components(
        schemas(
            UserRole,
            View,
            SignupRequest,
            LoginRequest,
            LoginResponse,
            LoginUser,
            SessionResponse,
            MessageResponse,
            ErrorResponse,
            Course,
            CreateCourseDto,
            StudentEnrollDto,
            AdminEnrollDto,
            StudentSummary,
            AddFeedbackDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup, login and session endpoints"),
        (name = "Courses", description = "Course catalogue and management"),
        (name = "Enrollments", description = "Student and admin enrollment"),
        (name = "Students", description = "Student roster"),
        (name = "Feedback", description = "Course feedback")
    ),
    info(
        title = "Zambool API",
        version = "0.1.0",
        description = "Course enrollment API: students enroll and leave feedback, instructors follow their courses, admins manage the catalogue.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/signup",
            "/api/login",
            "/api/session",
            "/api/course-list",
            "/api/add-course",
            "/api/delete-course/{id}",
            "/api/search-course/{course_code}",
            "/api/instructor-courses",
            "/api/student-enrollment",
            "/api/student-courses",
            "/api/enroll-student",
            "/api/remove-student/{id}/{username}",
            "/api/student-list",
            "/api/add-feedback",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
