use sqlx::PgPool;
use tracing::{info, instrument, warn};
use zambool_core::AppError;
use zambool_models::{CourseId, FeedbackId};

use crate::metrics;
use crate::modules::courses::service::{course_not_found, fetch_course_by_code};

pub struct FeedbackService;

impl FeedbackService {
    /// Stores feedback from a student currently enrolled in the course.
    #[instrument(skip(db, content), fields(db.operation = "INSERT", db.table = "feedback"))]
    pub async fn add_feedback(
        db: &PgPool,
        author_username: &str,
        course_code: &str,
        content: &str,
    ) -> Result<FeedbackId, AppError> {
        let mut tx = db.begin().await?;

        // Shared lock: a concurrent removal waits until the feedback is stored.
        sqlx::query_scalar::<_, CourseId>(
            "SELECT id FROM courses WHERE course_code = $1 FOR SHARE",
        )
        .bind(course_code.trim())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(course_not_found)?;

        let course = fetch_course_by_code(&mut *tx, course_code.trim())
            .await?
            .ok_or_else(course_not_found)?;

        if !course.accepts_feedback_from(author_username) {
            warn!(course.code = %course.course_code, "Feedback from student not enrolled");
            return Err(AppError::forbidden(
                "You are not enrolled in this course".to_string(),
            ));
        }

        let feedback_id = sqlx::query_scalar::<_, FeedbackId>(
            "INSERT INTO feedback (course_id, author_username, content)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(course.id)
        .bind(author_username)
        .bind(content)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        metrics::track_feedback_added();
        info!(feedback.id = %feedback_id, course.code = %course.course_code, "Feedback added");
        Ok(feedback_id)
    }
}
