use sqlx::{PgExecutor, PgPool};
use tracing::{debug, error, info, instrument, warn};
use zambool_core::AppError;
use zambool_models::{Course, CourseId, CreateCourseDto, UserRole};

use crate::metrics;

/// Course columns plus enrolled usernames and feedback, aggregated in order.
/// Expects the course table aliased as `c`.
pub(crate) const COURSE_COLUMNS: &str = "
    c.id, c.course_code, c.name, c.instructor_username, c.instructor_name, c.capacity,
    ARRAY(
        SELECT e.student_username FROM enrollments e
        WHERE e.course_id = c.id
        ORDER BY e.enrolled_at, e.student_username
    )::text[] AS students_enrolled,
    ARRAY(
        SELECT f.content FROM feedback f
        WHERE f.course_id = c.id
        ORDER BY f.created_at, f.id
    )::text[] AS feedback,
    c.created_at, c.updated_at";

pub(crate) fn course_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Course not found"))
}

/// Loads one course by code on any executor, so callers holding a
/// transaction see their own writes.
pub(crate) async fn fetch_course_by_code<'e, E>(
    executor: E,
    course_code: &str,
) -> Result<Option<Course>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Course>(&format!(
        "SELECT {COURSE_COLUMNS} FROM courses c WHERE c.course_code = $1"
    ))
    .bind(course_code)
    .fetch_optional(executor)
    .await
}

#[derive(sqlx::FromRow)]
struct InstructorRow {
    username: String,
    name: String,
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses c ORDER BY c.course_code"
        ))
        .fetch_all(db)
        .await?;

        debug!(count = courses.len(), "Fetched courses");
        Ok(courses)
    }

    /// Resolves `courseInstructor` to an instructor account: an exact
    /// username match wins, otherwise the display name must match exactly one
    /// instructor.
    #[instrument(skip(db))]
    async fn resolve_instructor(db: &PgPool, reference: &str) -> Result<InstructorRow, AppError> {
        let by_username = sqlx::query_as::<_, InstructorRow>(
            "SELECT username, name FROM users WHERE username = $1 AND role = $2",
        )
        .bind(reference)
        .bind(UserRole::Instructor)
        .fetch_optional(db)
        .await?;

        if let Some(instructor) = by_username {
            return Ok(instructor);
        }

        let mut by_name = sqlx::query_as::<_, InstructorRow>(
            "SELECT username, name FROM users WHERE name = $1 AND role = $2 LIMIT 2",
        )
        .bind(reference.trim())
        .bind(UserRole::Instructor)
        .fetch_all(db)
        .await?;

        match by_name.len() {
            0 => Err(AppError::bad_request(anyhow::anyhow!(
                "Instructor does not exist"
            ))),
            1 => Ok(by_name.remove(0)),
            _ => Err(AppError::bad_request(anyhow::anyhow!(
                "Instructor name is ambiguous; use the username"
            ))),
        }
    }

    #[instrument(skip(db, dto), fields(course.code = %dto.course_code, db.operation = "INSERT", db.table = "courses"))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let instructor = Self::resolve_instructor(db, &dto.course_instructor).await?;
        let course_code = dto.course_code.trim();

        let course_id = sqlx::query_scalar::<_, CourseId>(
            "INSERT INTO courses (course_code, name, instructor_username, instructor_name, capacity)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(course_code)
        .bind(dto.course_name.trim())
        .bind(&instructor.username)
        .bind(&instructor.name)
        .bind(dto.course_capacity)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!("Attempted to create course with existing code");
                return AppError::conflict(anyhow::anyhow!("Course code already exists"));
            }
            error!(error = %e, "Database error creating course");
            AppError::database(e)
        })?;

        let course = fetch_course_by_code(db, course_code)
            .await?
            .ok_or_else(course_not_found)?;

        metrics::track_course_created();
        info!(
            course.id = %course_id,
            instructor = %course.instructor_username,
            "Course created successfully"
        );

        Ok(course)
    }

    /// Enrollments and feedback are removed by cascade.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "courses"))]
    pub async fn delete_course(db: &PgPool, id: CourseId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(course_not_found());
        }

        metrics::track_course_deleted();
        info!(course.id = %id, "Course deleted");
        Ok(())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn find_by_code(db: &PgPool, course_code: &str) -> Result<Course, AppError> {
        fetch_course_by_code(db, course_code.trim())
            .await?
            .ok_or_else(course_not_found)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "courses"))]
    pub async fn instructor_courses(
        db: &PgPool,
        instructor_username: &str,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses c
             WHERE c.instructor_username = $1
             ORDER BY c.course_code"
        ))
        .bind(instructor_username)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }
}
