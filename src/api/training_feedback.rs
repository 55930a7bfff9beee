use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use sqlx::PgPool;

use super::error::ApiError;
use super::params::{validate_id, DateRangeQuery, ListWindow};
use crate::models::TrainingFeedback;
use crate::services::{TrainingFeedbackService, TrainingService};

pub fn training_feedback_routes() -> Router<PgPool> {
    Router::new()
        .route("/user/:id/feedbacks", get(list_feedbacks_by_user))
        .route(
            "/training/:id/feedback",
            get(get_feedback)
                .post(create_feedback)
                .put(update_feedback)
                .delete(delete_feedback),
        )
}

#[derive(Debug, Deserialize)]
pub struct TrainingFeedbackRequest {
    pub borg_scale: i32,
}

impl TrainingFeedbackRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.borg_scale < 6 || self.borg_scale > 20 {
            return Err(ApiError::validation("borg_scale must be between 6 and 20"));
        }
        Ok(())
    }
}

async fn list_feedbacks_by_user(
    State(db): State<PgPool>,
    Path(user_id): Path<i64>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<TrainingFeedback>>, ApiError> {
    validate_id(user_id)?;
    let service = TrainingFeedbackService::new(db);
    let feedbacks = match query.resolve()? {
        ListWindow::All => service.list_feedbacks_by_user(user_id).await?,
        ListWindow::Period { start, end } => {
            service
                .list_feedbacks_by_user_in_period(user_id, start, end)
                .await?
        }
    };
    Ok(Json(feedbacks))
}

async fn get_feedback(
    State(db): State<PgPool>,
    Path(training_id): Path<i64>,
) -> Result<Json<TrainingFeedback>, ApiError> {
    validate_id(training_id)?;
    let feedback = TrainingFeedbackService::new(db)
        .get_feedback_by_training(training_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(feedback))
}

async fn create_feedback(
    State(db): State<PgPool>,
    Path(training_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<TrainingFeedbackRequest>, ApiError>,
) -> Result<Json<TrainingFeedback>, ApiError> {
    validate_id(training_id)?;
    req.validate()?;

    // feedback only attaches to an existing, non-deleted training
    TrainingService::new(db.clone())
        .get_training(training_id)
        .await?
        .ok_or(ApiError::InvalidReference("invalid training_id"))?;

    let feedback = TrainingFeedbackService::new(db)
        .create_feedback(training_id, req.borg_scale)
        .await?;
    Ok(Json(feedback))
}

async fn update_feedback(
    State(db): State<PgPool>,
    Path(training_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<TrainingFeedbackRequest>, ApiError>,
) -> Result<Json<TrainingFeedback>, ApiError> {
    validate_id(training_id)?;
    req.validate()?;
    let feedback = TrainingFeedbackService::new(db)
        .update_feedback(training_id, req.borg_scale)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(feedback))
}

async fn delete_feedback(
    State(db): State<PgPool>,
    Path(training_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    validate_id(training_id)?;
    if !TrainingFeedbackService::new(db)
        .delete_feedback(training_id)
        .await?
    {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::OK)
}
