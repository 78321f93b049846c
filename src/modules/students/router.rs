use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::student_list;

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/student-list", get(student_list))
}
