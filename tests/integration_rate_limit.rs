mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use zambool::router::init_router;
use zambool_config::RateLimitConfig;
use zambool_models::UserRole;

use common::{detached_token, lazy_pool, test_state};

fn strict_config() -> RateLimitConfig {
    RateLimitConfig {
        enabled: true,
        general_per_second: 1,
        general_burst_size: 100,
        auth_per_second: 60,
        auth_burst_size: 2,
    }
}

// Admin signup is refused before the database is touched, so each attempt
// costs a token without needing Postgres.
fn signup_request(ip: &str) -> Request<Body> {
    let body = json!({
        "username": "mallory",
        "password": "analytical1!",
        "name": "Mallory",
        "role": "admin"
    });

    Request::builder()
        .method("POST")
        .uri("/api/signup")
        .header("content-type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_auth_endpoints_are_rate_limited() {
    let app = init_router(test_state(lazy_pool(), strict_config()));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(signup_request("203.0.113.7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    let response = app.oneshot(signup_request("203.0.113.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_is_per_client_ip() {
    let app = init_router(test_state(lazy_pool(), strict_config()));

    for _ in 0..3 {
        let _ = app
            .clone()
            .oneshot(signup_request("203.0.113.8"))
            .await
            .unwrap();
    }

    let response = app.oneshot(signup_request("198.51.100.4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_session_is_not_under_the_auth_limit() {
    let app = init_router(test_state(lazy_pool(), strict_config()));
    let token = detached_token(UserRole::Student);

    for _ in 0..5 {
        let request = Request::builder()
            .uri("/api/session")
            .header("authorization", format!("Bearer {}", token))
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_general_limit_applies_to_all_api_routes() {
    let config = RateLimitConfig {
        general_burst_size: 2,
        ..strict_config()
    };
    let app = init_router(test_state(lazy_pool(), config));

    let mut statuses = Vec::new();
    for _ in 0..3 {
        let request = Request::builder()
            .uri("/api/session")
            .header("x-forwarded-for", "203.0.113.10")
            .body(Body::empty())
            .unwrap();
        statuses.push(app.clone().oneshot(request).await.unwrap().status());
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::UNAUTHORIZED,
            StatusCode::UNAUTHORIZED,
            StatusCode::TOO_MANY_REQUESTS
        ]
    );
}

#[tokio::test]
async fn test_disabled_rate_limit_never_throttles() {
    let config = RateLimitConfig {
        enabled: false,
        ..strict_config()
    };
    let app = init_router(test_state(lazy_pool(), config));

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(signup_request("203.0.113.11"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
