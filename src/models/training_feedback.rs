use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Post-training perceived-exertion feedback, 1:1 with a training.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrainingFeedback {
    pub id: i64,
    pub training_id: i64,
    pub borg_scale: i32,
    pub created_at: DateTime<Utc>,
}
