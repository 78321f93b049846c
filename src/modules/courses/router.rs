use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{add_course, delete_course, instructor_courses, list_courses, search_course};

/// Open to anyone.
pub fn init_public_courses_router() -> Router<AppState> {
    Router::new().route("/course-list", get(list_courses))
}

/// Any valid token; the handler extracts the caller itself.
pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/search-course/{course_code}", get(search_course))
}

pub fn init_admin_courses_router() -> Router<AppState> {
    Router::new()
        .route("/add-course", post(add_course))
        .route("/delete-course/{id}", delete(delete_course))
}

pub fn init_instructor_courses_router() -> Router<AppState> {
    Router::new().route("/instructor-courses", get(instructor_courses))
}
