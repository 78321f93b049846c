//! # Zambool CLI
//!
//! Administrative tooling for Zambool: bootstrapping admin accounts and
//! filling a development database with fake instructors, students, courses
//! and enrollments.
//!
//! ## Usage
//!
//! ```ignore
//! use zambool_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(8); // 8 courses with defaults
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
