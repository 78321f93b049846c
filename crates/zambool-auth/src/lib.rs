//! # Zambool Auth
//!
//! Session token claims and JWT utilities for the Zambool API.
//!
//! A successful login issues one signed, short-lived access token. Protected
//! endpoints verify it on every request; there is no server-side session.
//!
//! # Example
//!
//! ```ignore
//! use zambool_auth::{create_access_token, verify_token};
//! use zambool_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "ada", "Ada Lovelace", "student", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.username, "ada");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
