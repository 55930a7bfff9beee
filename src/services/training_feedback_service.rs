use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::TrainingFeedback;

const FEEDBACK_COLUMNS: &str = "id, training_id, borg_scale, created_at";

pub struct TrainingFeedbackService {
    db: PgPool,
}

impl TrainingFeedbackService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_feedback(
        &self,
        training_id: i64,
        borg_scale: i32,
    ) -> Result<TrainingFeedback> {
        let feedback = sqlx::query_as::<_, TrainingFeedback>(&format!(
            r#"
            INSERT INTO training_feedback (training_id, borg_scale)
            VALUES ($1, $2)
            RETURNING {FEEDBACK_COLUMNS}
            "#
        ))
        .bind(training_id)
        .bind(borg_scale)
        .fetch_one(&self.db)
        .await?;

        Ok(feedback)
    }

    pub async fn get_feedback_by_training(
        &self,
        training_id: i64,
    ) -> Result<Option<TrainingFeedback>> {
        let feedback = sqlx::query_as::<_, TrainingFeedback>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM training_feedback WHERE training_id = $1"
        ))
        .bind(training_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(feedback)
    }

    pub async fn list_feedbacks_by_user(&self, user_id: i64) -> Result<Vec<TrainingFeedback>> {
        let feedbacks = sqlx::query_as::<_, TrainingFeedback>(
            r#"
            SELECT f.id, f.training_id, f.borg_scale, f.created_at
            FROM training_feedback f
            JOIN training t ON t.id = f.training_id
            WHERE t.user_id = $1 AND t.deleted_at IS NULL
            ORDER BY t.date
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(feedbacks)
    }

    /// Bounds apply to the training date and are inclusive on both ends.
    pub async fn list_feedbacks_by_user_in_period(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TrainingFeedback>> {
        let feedbacks = sqlx::query_as::<_, TrainingFeedback>(
            r#"
            SELECT f.id, f.training_id, f.borg_scale, f.created_at
            FROM training_feedback f
            JOIN training t ON t.id = f.training_id
            WHERE t.user_id = $1 AND t.deleted_at IS NULL AND t.date BETWEEN $2 AND $3
            ORDER BY t.date
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(feedbacks)
    }

    pub async fn update_feedback(
        &self,
        training_id: i64,
        borg_scale: i32,
    ) -> Result<Option<TrainingFeedback>> {
        let feedback = sqlx::query_as::<_, TrainingFeedback>(&format!(
            r#"
            UPDATE training_feedback
            SET borg_scale = $2
            WHERE training_id = $1
            RETURNING {FEEDBACK_COLUMNS}
            "#
        ))
        .bind(training_id)
        .bind(borg_scale)
        .fetch_optional(&self.db)
        .await?;

        Ok(feedback)
    }

    pub async fn delete_feedback(&self, training_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM training_feedback WHERE training_id = $1")
            .bind(training_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
