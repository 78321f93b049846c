//! # Zambool Config
//!
//! Configuration types for the Zambool API, loaded from environment variables:
//!
//! - [`jwt`]: session token signing configuration
//! - [`cors`]: allowed browser origins
//! - [`rate_limit`]: request rate limits for signup/login
//! - [`server`]: bind address and observability switches
//!
//! # Example
//!
//! ```ignore
//! use zambool_config::{JwtConfig, CorsConfig, RateLimitConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod rate_limit;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
