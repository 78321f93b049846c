use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether metrics are recorded. Fixed by the first call to [`init_metrics`];
/// enabled until then.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get().unwrap_or(&true)
}

/// Installs the Prometheus recorder with an upkeep task.
/// Returns None if observability is disabled or the recorder cannot be installed.
pub fn init_metrics(enabled: bool) -> Option<PrometheusHandle> {
    let enabled = *OBSERVABILITY_ENABLED.get_or_init(|| enabled);
    if !enabled {
        return None;
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5,
                10.0,
            ],
        )
        .and_then(|builder| builder.install_recorder())
        .inspect_err(|e| tracing::error!(error = %e, "Failed to install Prometheus recorder"))
        .ok()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.to_string()).increment(1);

    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    let status_category = match status {
        200..=299 => "2xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };
    counter!("http_requests_by_status", "status_category" => status_category).increment(1);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router exposing `/metrics`
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

pub fn track_user_signup(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("users_created_total", "role" => role.to_string()).increment(1);
}

pub fn track_user_login_success(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => role.to_string(), "status" => "success").increment(1);
}

pub fn track_user_login_failure(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => "unknown", "status" => "failure", "reason" => reason.to_string()).increment(1);
}

pub fn track_jwt_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("jwt_tokens_issued_total").increment(1);
}

pub fn track_course_created() {
    if !is_observability_enabled() {
        return;
    }
    counter!("courses_created_total").increment(1);
}

pub fn track_course_deleted() {
    if !is_observability_enabled() {
        return;
    }
    counter!("courses_deleted_total").increment(1);
}

/// `source` is `self` for student self-enrollment, `admin` otherwise.
pub fn track_enrollment(source: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("enrollments_total", "source" => source).increment(1);
}

pub fn track_enrollment_rejected(reason: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("enrollments_rejected_total", "reason" => reason).increment(1);
}

pub fn track_student_removed() {
    if !is_observability_enabled() {
        return;
    }
    counter!("enrollments_removed_total").increment(1);
}

pub fn track_feedback_added() {
    if !is_observability_enabled() {
        return;
    }
    counter!("feedback_added_total").increment(1);
}
