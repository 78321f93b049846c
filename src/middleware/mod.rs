//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: the `AuthUser` extractor (bearer token → claims)
//! - [`role`]: role guards for route groups
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` verifies the JWT and extracts claims; no usable header is a
//!    401, a bad or expired token a 403
//! 3. Role guards on the route group reject callers with the wrong role (403)
//! 4. Handler executes with the caller's identity
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn student_courses(auth_user: AuthUser) -> impl IntoResponse {
//!     let username = auth_user.username();
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;
