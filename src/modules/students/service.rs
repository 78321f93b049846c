use sqlx::PgPool;
use tracing::{debug, instrument};
use zambool_core::AppError;
use zambool_models::{StudentSummary, UserRole};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "users"))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<StudentSummary>, AppError> {
        let students = sqlx::query_as::<_, StudentSummary>(
            "SELECT u.id, u.username, u.name,
                    ARRAY(
                        SELECT c.course_code FROM enrollments e
                        JOIN courses c ON c.id = e.course_id
                        WHERE e.student_username = u.username
                        ORDER BY c.course_code
                    )::text[] AS courses_enrolled
             FROM users u
             WHERE u.role = $1
             ORDER BY u.username",
        )
        .bind(UserRole::Student)
        .fetch_all(db)
        .await?;

        debug!(count = students.len(), "Fetched students");
        Ok(students)
    }
}
