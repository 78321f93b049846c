pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod feedback;
pub mod students;
