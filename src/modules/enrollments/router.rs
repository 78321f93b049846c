use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{enroll_student, remove_student, student_courses, student_enrollment};

pub fn init_student_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/student-enrollment", post(student_enrollment))
        .route("/student-courses", get(student_courses))
}

pub fn init_admin_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/enroll-student", post(enroll_student))
        .route("/remove-student/{id}/{username}", delete(remove_student))
}
