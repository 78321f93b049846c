//! Seed records and the knobs that size a seeding run.

use zambool_models::UserRole;

/// Every seeded username starts with this, which is how `clear-seed` finds them.
pub const SEED_USERNAME_PREFIX: &str = "seed.";

/// Password shared by all seeded accounts.
pub const SEED_PASSWORD: &str = "password1!";

pub struct UserSeed {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

pub struct CourseSeed {
    pub course_code: String,
    pub name: String,
    pub instructor_username: String,
    pub instructor_name: String,
    pub capacity: i32,
}

/// Sizes for a full seeding run.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_courses: usize,
    pub instructors: usize,
    pub students: usize,
    pub courses_per_student: usize,
    pub capacity: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_courses: 8,
            instructors: 4,
            students: 60,
            courses_per_student: 3,
            capacity: 30,
        }
    }
}

impl SeedConfig {
    pub fn new(num_courses: usize) -> Self {
        Self {
            num_courses,
            ..Default::default()
        }
    }

    pub fn with_users(mut self, instructors: usize, students: usize) -> Self {
        self.instructors = instructors;
        self.students = students;
        self
    }

    pub fn with_enrollments(mut self, courses_per_student: usize, capacity: i32) -> Self {
        self.courses_per_student = courses_per_student;
        self.capacity = capacity.max(1);
        self
    }
}
