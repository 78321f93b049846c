use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use zambool::logging::init_tracing;
use zambool::metrics::{init_metrics, metrics_app};
use zambool::router::init_router;
use zambool::state::AppState;
use zambool_config::ServerConfig;
use zambool_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    let _log_guard = init_tracing(&server_config.log_dir);

    if let Err(e) = run(server_config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run(server_config: ServerConfig) -> anyhow::Result<()> {
    let db = init_db_pool().await?;
    run_migrations(&db).await?;

    let state = AppState::from_env(db);
    if state.jwt_config.uses_dev_secret() {
        warn!("Running with the development JWT secret; set JWT_SECRET in production");
    }

    let mut app = init_router(state);
    if let Some(handle) = init_metrics(server_config.observability_enabled) {
        app = app.merge(metrics_app(handle));
        info!("Prometheus metrics available at /metrics");
    }

    let addr = server_config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🚀 Server running on http://{}", addr);
    info!("📚 Swagger UI available at http://{}/swagger-ui", addr);
    info!("📖 Scalar UI available at http://{}/scalar", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
