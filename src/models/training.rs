use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "training_sport", rename_all = "snake_case")]
pub enum TrainingSport {
    Running,
    Cycling,
    Swimming,
    Strength,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "training_status", rename_all = "snake_case")]
pub enum TrainingStatus {
    New,
    Notified,
    Overdue,
    Done,
    DoneFeedback,
}

/// A planned or completed training session owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub sport: TrainingSport,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub training_type: Option<String>,
    pub intensity: Option<String>,
    pub details: String,
    pub status: TrainingStatus,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateTrainingParams {
    pub user_id: i64,
    pub date: NaiveDate,
    pub sport: TrainingSport,
    pub training_type: Option<String>,
    pub intensity: Option<String>,
    pub details: String,
    pub status: TrainingStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateTrainingParams {
    pub id: i64,
    pub date: NaiveDate,
    pub sport: TrainingSport,
    pub training_type: Option<String>,
    pub intensity: Option<String>,
    pub details: String,
    pub status: TrainingStatus,
}
