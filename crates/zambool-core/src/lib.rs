//! # Zambool Core
//!
//! Core types, errors, and utilities for the Zambool API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing, verification and strength rules
//!
//! # Example
//!
//! ```ignore
//! use zambool_core::errors::AppError;
//! use zambool_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Course not found"));
//! let hash = hash_password("s3cret!pass")?;
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, validate_password_strength, verify_password};
