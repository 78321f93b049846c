use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::add_feedback;

pub fn init_feedback_router() -> Router<AppState> {
    Router::new().route("/add-feedback", post(add_feedback))
}
