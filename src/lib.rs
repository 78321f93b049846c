//! # Zambool API
//!
//! A course enrollment REST API built with Rust, Axum, and PostgreSQL.
//! Students browse the catalogue, enroll and leave feedback; instructors follow
//! the courses they teach and what students say about them; admins create
//! courses and manage who is enrolled where.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor and role guards
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Signup, login, session
//! │   ├── courses/     # Catalogue, course management, instructor view
//! │   ├── enrollments/ # Self-enrollment, admin enrollment and removal
//! │   ├── feedback/    # Course feedback
//! │   └── students/    # Student roster
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Request logging and tracing setup
//! ├── metrics.rs        # Prometheus metrics
//! ├── router.rs         # Route groups and their guards
//! ├── state.rs          # Shared application state
//! └── validator.rs      # ValidatedJson extractor
//! ```
//!
//! Each feature module has a `controller.rs` (HTTP handlers), a `service.rs`
//! (queries and rules) and a `router.rs`. Entities and DTOs live in the
//! `zambool-models` crate.
//!
//! ## Roles
//!
//! | Role | Lands on | May |
//! |------|----------|-----|
//! | Student | `enrollment` | enroll, list own courses, leave feedback |
//! | Instructor | `courses` | list own courses with feedback |
//! | Admin | `manage-enrollment` | create/delete courses, enroll/remove students, list students |
//!
//! Admin accounts cannot be created through signup:
//!
//! ```bash
//! cargo run --bin zambool-cli -- create-admin
//! ```
//!
//! ## Authentication
//!
//! Login returns a signed JWT (default lifetime 1 hour) carrying the user id,
//! username, display name and role. Protected endpoints expect
//! `Authorization: Bearer <token>`: no token is a 401, a bad or expired token
//! a 403.
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3001/swagger-ui`
//! - Scalar: `http://localhost:3001/scalar`

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use zambool_auth;
pub use zambool_config;
pub use zambool_core;
pub use zambool_db;
pub use zambool_models;
