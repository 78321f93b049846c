//! # Zambool DB
//!
//! PostgreSQL connection pool and schema migrations.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 10)
//!
//! # Example
//!
//! ```ignore
//! use zambool_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool().await?;
//! run_migrations(&pool).await?;
//! ```

use std::env;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

/// Schema migrations shipped with the workspace (`migrations/` at the root).
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, thiserror::Error)]
pub enum DbInitError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Initializes a PostgreSQL connection pool from `DATABASE_URL`.
///
/// The returned pool is cheaply cloneable and should be stored once in the
/// application state.
pub async fn init_db_pool() -> Result<PgPool, DbInitError> {
    let database_url = env::var("DATABASE_URL").map_err(|_| DbInitError::MissingUrl)?;
    let max_connections = env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .map_err(DbInitError::Connect)?;

    tracing::info!(max_connections, "Database pool initialized");
    Ok(pool)
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_url_message() {
        assert_eq!(DbInitError::MissingUrl.to_string(), "DATABASE_URL must be set");
        assert!(DbInitError::MissingUrl.source().is_none());
    }

    #[test]
    fn test_connect_error_keeps_source() {
        let err = DbInitError::Connect(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Failed to connect to database: "));
        assert!(err.source().is_some());
    }
}
