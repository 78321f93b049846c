//! Course and enrollment seeding.

use fake::Fake;
use rayon::prelude::*;
use sqlx::PgPool;
use std::time::Instant;

use super::models::{CourseSeed, SEED_USERNAME_PREFIX, UserSeed};

const SUBJECTS: &[(&str, &str)] = &[
    ("CS", "Computer Science"),
    ("MA", "Mathematics"),
    ("PH", "Physics"),
    ("CH", "Chemistry"),
    ("BI", "Biology"),
    ("EC", "Economics"),
    ("HI", "History"),
    ("LI", "Literature"),
];

const LEVELS: &[&str] = &["Foundations of", "Topics in", "Advanced", "Applied"];

/// Generates courses spread round-robin over the given instructors.
pub fn generate_courses(count: usize, instructors: &[UserSeed], capacity: i32) -> Vec<CourseSeed> {
    if instructors.is_empty() {
        return Vec::new();
    }

    (0..count)
        .into_par_iter()
        .map(|idx| {
            let (prefix, subject) = SUBJECTS[idx % SUBJECTS.len()];
            let level = LEVELS[(0..LEVELS.len()).fake::<usize>()];
            let number: u32 = (100..500).fake();
            let instructor = &instructors[idx % instructors.len()];

            CourseSeed {
                course_code: format!("SEED-{}{}-{}", prefix, number, idx),
                name: format!("{} {}", level, subject),
                instructor_username: instructor.username.clone(),
                instructor_name: instructor.name.clone(),
                capacity,
            }
        })
        .collect()
}

/// Assigns each student to `per_student` consecutive courses, starting at an
/// offset that rotates with the student index, skipping courses at capacity.
///
/// Returns `(course_code, student_username)` pairs.
pub fn plan_enrollments(
    courses: &[CourseSeed],
    students: &[UserSeed],
    per_student: usize,
) -> Vec<(String, String)> {
    let mut taken = vec![0usize; courses.len()];
    let mut pairs = Vec::new();

    if courses.is_empty() {
        return pairs;
    }

    for (student_idx, student) in students.iter().enumerate() {
        let mut enrolled = 0;
        for step in 0..courses.len() {
            if enrolled == per_student {
                break;
            }
            let course_idx = (student_idx + step) % courses.len();
            let capacity = usize::try_from(courses[course_idx].capacity).unwrap_or(0);
            if taken[course_idx] >= capacity {
                continue;
            }
            taken[course_idx] += 1;
            enrolled += 1;
            pairs.push((
                courses[course_idx].course_code.clone(),
                student.username.clone(),
            ));
        }
    }

    pairs
}

pub async fn seed_courses(
    db: &PgPool,
    count: usize,
    instructors: &[UserSeed],
    capacity: i32,
) -> Result<Vec<CourseSeed>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📚 Seeding {} courses...", count);

    let courses = generate_courses(count, instructors, capacity);
    if courses.is_empty() {
        return Ok(courses);
    }

    let result = sqlx::query(
        "INSERT INTO courses (course_code, name, instructor_username, instructor_name, capacity)
         SELECT * FROM UNNEST($1::varchar[], $2::varchar[], $3::varchar[], $4::varchar[], $5::int4[])
         ON CONFLICT (course_code) DO NOTHING",
    )
    .bind(courses.iter().map(|c| c.course_code.clone()).collect::<Vec<_>>())
    .bind(courses.iter().map(|c| c.name.clone()).collect::<Vec<_>>())
    .bind(
        courses
            .iter()
            .map(|c| c.instructor_username.clone())
            .collect::<Vec<_>>(),
    )
    .bind(
        courses
            .iter()
            .map(|c| c.instructor_name.clone())
            .collect::<Vec<_>>(),
    )
    .bind(courses.iter().map(|c| c.capacity).collect::<Vec<_>>())
    .execute(db)
    .await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        result.rows_affected(),
        start_time.elapsed()
    );

    Ok(courses)
}

pub async fn seed_enrollments(
    db: &PgPool,
    courses: &[CourseSeed],
    students: &[UserSeed],
    per_student: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    let pairs = plan_enrollments(courses, students, per_student);
    println!("📝 Seeding {} enrollments...", pairs.len());

    let (codes, usernames): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();

    let result = sqlx::query(
        "INSERT INTO enrollments (course_id, student_username)
         SELECT c.id, e.username
         FROM UNNEST($1::varchar[], $2::varchar[]) AS e(code, username)
         JOIN courses c ON c.course_code = e.code
         ON CONFLICT DO NOTHING",
    )
    .bind(codes)
    .bind(usernames)
    .execute(db)
    .await?;

    println!(
        "   ✓ Inserted {} enrollments in {:?}",
        result.rows_affected(),
        start_time.elapsed()
    );

    Ok(result.rows_affected())
}

/// Deletes courses taught by seeded instructors. Enrollments and feedback
/// go with them.
pub async fn clear_courses(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let result = sqlx::query("DELETE FROM courses WHERE instructor_username LIKE $1")
        .bind(format!("{}%", SEED_USERNAME_PREFIX))
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
