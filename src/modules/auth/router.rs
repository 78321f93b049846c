use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_governor::GovernorLayer;
use zambool_config::RateLimitConfig;

use crate::state::AppState;

use super::controller::{login, session, signup};

pub fn init_auth_router(rate_limit: &RateLimitConfig) -> Router<AppState> {
    let credentials = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login));

    let credentials = if rate_limit.enabled {
        credentials.layer(GovernorLayer::new(Arc::new(
            rate_limit.auth_governor_config(),
        )))
    } else {
        credentials
    };

    credentials.route("/session", get(session))
}
