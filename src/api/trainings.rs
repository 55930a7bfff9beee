use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use sqlx::PgPool;

use super::error::ApiError;
use super::params::{parse_date, validate_id, DateRangeQuery, ListWindow};
use crate::models::{
    CreateTrainingParams, Training, TrainingSport, TrainingStatus, UpdateTrainingParams,
};
use crate::services::{TrainingService, UserService};

pub fn training_routes() -> Router<PgPool> {
    Router::new()
        .route("/user/:id/trainings", get(list_trainings_by_user))
        .route("/training", post(create_training))
        .route(
            "/training/:id",
            get(get_training).put(update_training).delete(delete_training),
        )
}

#[derive(Debug, Deserialize)]
pub struct CreateTrainingRequest {
    pub user_id: i64,
    pub date: String,
    pub sport: TrainingSport,
    #[serde(rename = "type")]
    pub training_type: Option<String>,
    pub intensity: Option<String>,
    pub details: String,
    pub status: Option<TrainingStatus>,
}

impl CreateTrainingRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_id(self.user_id)?;
        parse_date(&self.date)?;
        if self.details.trim().is_empty() {
            return Err(ApiError::validation("details must not be empty"));
        }
        Ok(())
    }

    pub fn into_params(self) -> Result<CreateTrainingParams, ApiError> {
        Ok(CreateTrainingParams {
            user_id: self.user_id,
            date: parse_date(&self.date)?,
            sport: self.sport,
            training_type: self.training_type,
            intensity: self.intensity,
            details: self.details,
            // omitted status means a freshly planned training
            status: self.status.unwrap_or(TrainingStatus::New),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTrainingRequest {
    pub date: String,
    pub sport: TrainingSport,
    #[serde(rename = "type")]
    pub training_type: Option<String>,
    pub intensity: Option<String>,
    pub details: String,
    pub status: TrainingStatus,
}

impl UpdateTrainingRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        parse_date(&self.date)?;
        if self.details.trim().is_empty() {
            return Err(ApiError::validation("details must not be empty"));
        }
        Ok(())
    }

    pub fn into_params(self, id: i64) -> Result<UpdateTrainingParams, ApiError> {
        Ok(UpdateTrainingParams {
            id,
            date: parse_date(&self.date)?,
            sport: self.sport,
            training_type: self.training_type,
            intensity: self.intensity,
            details: self.details,
            status: self.status,
        })
    }
}

async fn list_trainings_by_user(
    State(db): State<PgPool>,
    Path(user_id): Path<i64>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<Training>>, ApiError> {
    validate_id(user_id)?;
    let service = TrainingService::new(db);
    let trainings = match query.resolve()? {
        ListWindow::All => service.list_trainings_by_user(user_id).await?,
        ListWindow::Period { start, end } => {
            service
                .list_trainings_by_user_in_period(user_id, start, end)
                .await?
        }
    };
    Ok(Json(trainings))
}

async fn get_training(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Training>, ApiError> {
    validate_id(id)?;
    let training = TrainingService::new(db)
        .get_training(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(training))
}

async fn create_training(
    State(db): State<PgPool>,
    WithRejection(Json(req), _): WithRejection<Json<CreateTrainingRequest>, ApiError>,
) -> Result<Json<Training>, ApiError> {
    req.validate()?;

    // the owner must exist and not be deleted
    UserService::new(db.clone())
        .get_user(req.user_id)
        .await?
        .ok_or(ApiError::InvalidReference("invalid user_id"))?;

    let training = TrainingService::new(db)
        .create_training(req.into_params()?)
        .await?;
    tracing::info!(training_id = training.id, "created training");
    Ok(Json(training))
}

async fn update_training(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateTrainingRequest>, ApiError>,
) -> Result<Json<Training>, ApiError> {
    validate_id(id)?;
    req.validate()?;
    let training = TrainingService::new(db)
        .update_training(req.into_params(id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(training))
}

async fn delete_training(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    validate_id(id)?;
    if !TrainingService::new(db).delete_training(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::OK)
}
