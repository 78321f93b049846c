//! Development data seeding.
//!
//! Seeded accounts carry the [`SEED_USERNAME_PREFIX`] so they can be removed
//! without touching real users.

pub mod courses;
pub mod models;
pub mod users;

use sqlx::PgPool;
use std::time::Instant;
use zambool_core::hash_password;
use zambool_models::UserRole;

pub use models::{SEED_PASSWORD, SEED_USERNAME_PREFIX, SeedConfig};

/// Seeds instructors, students, courses and enrollments.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Starting database seeding...\n");

    // bcrypt is slow; hash once and share it across every seeded account
    let password_hash =
        hash_password(SEED_PASSWORD).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let instructors =
        users::seed_users(db, config.instructors, UserRole::Instructor, &password_hash).await?;
    let students = users::seed_users(db, config.students, UserRole::Student, &password_hash).await?;
    let courses =
        courses::seed_courses(db, config.num_courses, &instructors, config.capacity).await?;
    courses::seed_enrollments(db, &courses, &students, config.courses_per_student).await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("   All seeded accounts use the password: {}", SEED_PASSWORD);

    Ok(())
}

/// Removes every seeded course and account. Admins and real users stay.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Clearing seeded data...");

    let courses = courses::clear_courses(db).await?;
    println!("   ✓ Removed {} courses", courses);

    // Seeded students' rows in real courses are not cascaded.
    let enrollments = sqlx::query("DELETE FROM enrollments WHERE student_username LIKE $1")
        .bind(format!("{}%", SEED_USERNAME_PREFIX))
        .execute(db)
        .await?
        .rows_affected();
    println!("   ✓ Removed {} enrollments", enrollments);

    let feedback = sqlx::query("DELETE FROM feedback WHERE author_username LIKE $1")
        .bind(format!("{}%", SEED_USERNAME_PREFIX))
        .execute(db)
        .await?
        .rows_affected();
    println!("   ✓ Removed {} feedback entries", feedback);

    let users = users::clear_users(db).await?;
    println!("   ✓ Removed {} users", users);

    println!("✅ Seeded data cleared");
    Ok(())
}
