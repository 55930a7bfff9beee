use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{CreateTrainingParams, Training, UpdateTrainingParams};

const TRAINING_COLUMNS: &str =
    "id, user_id, date, sport, type, intensity, details, status, created_at, deleted_at";

pub struct TrainingService {
    db: PgPool,
}

impl TrainingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_training(&self, params: CreateTrainingParams) -> Result<Training> {
        let training = sqlx::query_as::<_, Training>(&format!(
            r#"
            INSERT INTO training (user_id, date, sport, type, intensity, details, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TRAINING_COLUMNS}
            "#
        ))
        .bind(params.user_id)
        .bind(params.date)
        .bind(params.sport)
        .bind(params.training_type)
        .bind(params.intensity)
        .bind(params.details)
        .bind(params.status)
        .fetch_one(&self.db)
        .await?;

        Ok(training)
    }

    pub async fn get_training(&self, training_id: i64) -> Result<Option<Training>> {
        let training = sqlx::query_as::<_, Training>(&format!(
            "SELECT {TRAINING_COLUMNS} FROM training WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(training_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(training)
    }

    pub async fn list_trainings_by_user(&self, user_id: i64) -> Result<Vec<Training>> {
        let trainings = sqlx::query_as::<_, Training>(&format!(
            "SELECT {TRAINING_COLUMNS} FROM training WHERE user_id = $1 AND deleted_at IS NULL ORDER BY date"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(trainings)
    }

    /// Bounds are inclusive on both ends.
    pub async fn list_trainings_by_user_in_period(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Training>> {
        let trainings = sqlx::query_as::<_, Training>(&format!(
            "SELECT {TRAINING_COLUMNS} FROM training WHERE user_id = $1 AND deleted_at IS NULL AND date BETWEEN $2 AND $3 ORDER BY date"
        ))
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(trainings)
    }

    pub async fn update_training(&self, params: UpdateTrainingParams) -> Result<Option<Training>> {
        let training = sqlx::query_as::<_, Training>(&format!(
            r#"
            UPDATE training
            SET date = $2,
                sport = $3,
                type = $4,
                intensity = $5,
                details = $6,
                status = $7
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {TRAINING_COLUMNS}
            "#
        ))
        .bind(params.id)
        .bind(params.date)
        .bind(params.sport)
        .bind(params.training_type)
        .bind(params.intensity)
        .bind(params.details)
        .bind(params.status)
        .fetch_optional(&self.db)
        .await?;

        Ok(training)
    }

    /// Soft delete. Returns false when the training does not exist or is
    /// already deleted.
    pub async fn delete_training(&self, training_id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE training SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(training_id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
