//! # Zambool Models
//!
//! Domain models and DTOs for the Zambool API: database rows (`sqlx::FromRow`),
//! request bodies (`validator::Validate`), responses, and their OpenAPI schemas.
//!
//! # Modules
//!
//! - [`auth`]: signup, login and session models
//! - [`courses`]: courses and the enrollment decision rules
//! - [`feedback`]: course feedback
//! - [`ids`]: typed UUID identifiers
//! - [`students`]: student roster entries
//! - [`users`]: users and roles
//!
//! Request and response bodies use camelCase field names on the wire.

pub mod auth;
pub mod courses;
pub mod feedback;
pub mod ids;
pub mod students;
pub mod users;

mod text;

pub use auth::{
    Claims, LoginRequest, LoginResponse, LoginUser, MessageResponse, SessionResponse,
    SignupRequest,
};
pub use courses::{
    AdminEnrollDto, Course, CreateCourseDto, EnrollmentCheck, StudentEnrollDto,
};
pub use feedback::AddFeedbackDto;
pub use ids::{CourseId, FeedbackId, UserId};
pub use students::StudentSummary;
pub use users::{User, UserRole, View};
