use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::role::{require_admin, require_instructor, require_student};
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::{
    init_admin_courses_router, init_courses_router, init_instructor_courses_router,
    init_public_courses_router,
};
use crate::modules::enrollments::router::{
    init_admin_enrollments_router, init_student_enrollments_router,
};
use crate::modules::feedback::router::init_feedback_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

fn init_api_router(state: &AppState) -> Router<AppState> {
    let admin_routes = init_admin_courses_router()
        .merge(init_admin_enrollments_router())
        .merge(init_students_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let student_routes = init_student_enrollments_router()
        .merge(init_feedback_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_student,
        ));

    let instructor_routes = init_instructor_courses_router().route_layer(
        middleware::from_fn_with_state(state.clone(), require_instructor),
    );

    let api = Router::new()
        .merge(init_auth_router(&state.rate_limit_config))
        .merge(init_public_courses_router())
        .merge(init_courses_router())
        .merge(admin_routes)
        .merge(student_routes)
        .merge(instructor_routes);

    if state.rate_limit_config.enabled {
        api.layer(GovernorLayer::new(Arc::new(
            state.rate_limit_config.general_governor_config(),
        )))
    } else {
        api
    }
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", init_api_router(&state))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
