use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument, warn};
use zambool_core::AppError;
use zambool_models::{Course, CourseId, EnrollmentCheck, UserRole};

use crate::metrics;
use crate::modules::courses::service::{COURSE_COLUMNS, course_not_found, fetch_course_by_code};

/// Result of an enrollment request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    Enrolled,
    AlreadyEnrolled,
}

/// Locks the course row for the rest of the transaction and loads it.
///
/// Every path that adds a seat goes through here, so capacity checks and
/// inserts for one course are serialized.
async fn lock_course(
    tx: &mut Transaction<'_, Postgres>,
    course_code: &str,
) -> Result<Course, AppError> {
    sqlx::query_scalar::<_, CourseId>("SELECT id FROM courses WHERE course_code = $1 FOR UPDATE")
        .bind(course_code)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(course_not_found)?;

    fetch_course_by_code(&mut **tx, course_code)
        .await?
        .ok_or_else(course_not_found)
}

async fn insert_enrollment(
    tx: &mut Transaction<'_, Postgres>,
    course_id: CourseId,
    student_username: &str,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO enrollments (course_id, student_username) VALUES ($1, $2)")
        .bind(course_id)
        .bind(student_username)
        .execute(&mut **tx)
        .await?;

    sqlx::query("UPDATE courses SET updated_at = NOW() WHERE id = $1")
        .bind(course_id)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

pub struct EnrollmentService;

impl EnrollmentService {
    /// A student takes a seat in a course, subject to capacity.
    #[instrument(skip(db), fields(db.operation = "INSERT", db.table = "enrollments"))]
    pub async fn enroll_self(
        db: &PgPool,
        student_username: &str,
        course_code: &str,
    ) -> Result<EnrollmentOutcome, AppError> {
        let mut tx = db.begin().await?;
        let course = lock_course(&mut tx, course_code.trim()).await?;

        match course.enrollment_check(student_username) {
            EnrollmentCheck::AlreadyEnrolled => {
                info!(course.code = %course.course_code, "Student already enrolled");
                Ok(EnrollmentOutcome::AlreadyEnrolled)
            }
            EnrollmentCheck::Full => {
                metrics::track_enrollment_rejected("full");
                warn!(
                    course.code = %course.course_code,
                    capacity = course.capacity,
                    "Enrollment rejected, course is full"
                );
                Err(AppError::conflict(anyhow::anyhow!("Course is full")))
            }
            EnrollmentCheck::Eligible => {
                insert_enrollment(&mut tx, course.id, student_username).await?;
                tx.commit().await?;

                metrics::track_enrollment("self");
                info!(course.code = %course.course_code, "Student enrolled");
                Ok(EnrollmentOutcome::Enrolled)
            }
        }
    }

    /// An admin places a student in a course. Capacity is not enforced.
    #[instrument(skip(db), fields(db.operation = "INSERT", db.table = "enrollments"))]
    pub async fn enroll_student(
        db: &PgPool,
        student_username: &str,
        course_code: &str,
    ) -> Result<EnrollmentOutcome, AppError> {
        let mut tx = db.begin().await?;
        let course = lock_course(&mut tx, course_code.trim()).await?;

        let is_student = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND role = $2)",
        )
        .bind(student_username)
        .bind(UserRole::Student)
        .fetch_one(&mut *tx)
        .await?;

        if !is_student {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        if course.is_enrolled(student_username) {
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }

        if course.is_full() {
            warn!(
                course.code = %course.course_code,
                capacity = course.capacity,
                "Admin enrollment exceeds course capacity"
            );
        }

        insert_enrollment(&mut tx, course.id, student_username).await?;
        tx.commit().await?;

        metrics::track_enrollment("admin");
        info!(course.code = %course.course_code, "Student enrolled by admin");
        Ok(EnrollmentOutcome::Enrolled)
    }

    /// Removes a student from a course. Their feedback stays.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "enrollments"))]
    pub async fn remove_student(
        db: &PgPool,
        course_id: CourseId,
        student_username: &str,
    ) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        sqlx::query_scalar::<_, CourseId>("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
            .bind(course_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(course_not_found)?;

        let result =
            sqlx::query("DELETE FROM enrollments WHERE course_id = $1 AND student_username = $2")
                .bind(course_id)
                .bind(student_username)
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Student not found in the course"
            )));
        }

        sqlx::query("UPDATE courses SET updated_at = NOW() WHERE id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        metrics::track_student_removed();
        info!(course.id = %course_id, "Student removed from course");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn student_courses(
        db: &PgPool,
        student_username: &str,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses c
             WHERE EXISTS (
                 SELECT 1 FROM enrollments e
                 WHERE e.course_id = c.id AND e.student_username = $1
             )
             ORDER BY c.course_code"
        ))
        .bind(student_username)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }
}
