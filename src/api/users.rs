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
use super::params::{parse_date, validate_id, PaginationQuery};
use crate::models::{CreateUserParams, UpdateUserParams, User, UserType};
use crate::services::UserService;

pub fn user_routes() -> Router<PgPool> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/active", get(list_active_users))
        .route("/users/all", get(list_all_users))
        .route("/user", post(create_user))
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub birth: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("name must not be empty"));
        }
        if !is_valid_email(&self.email) {
            return Err(ApiError::validation("invalid email address"));
        }
        if self.password.len() < 8 {
            return Err(ApiError::validation("password must be at least 8 characters"));
        }
        if let Some(birth) = self.birth.as_deref() {
            parse_date(birth)?;
        }
        Ok(())
    }

    pub fn into_params(self) -> Result<CreateUserParams, ApiError> {
        let birth = self.birth.as_deref().map(parse_date).transpose()?;
        Ok(CreateUserParams {
            user_type: self.user_type,
            name: self.name,
            email: self.email,
            password_hash: hash_password(&self.password)?,
            phone: self.phone,
            birth,
        })
    }
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "type")]
    pub user_type: Option<UserType>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub birth: Option<String>,
    pub active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = self.name.as_deref() {
            if name.trim().is_empty() {
                return Err(ApiError::validation("name must not be empty"));
            }
        }
        if let Some(email) = self.email.as_deref() {
            if !is_valid_email(email) {
                return Err(ApiError::validation("invalid email address"));
            }
        }
        if let Some(password) = self.password.as_deref() {
            if password.len() < 8 {
                return Err(ApiError::validation("password must be at least 8 characters"));
            }
        }
        if let Some(birth) = self.birth.as_deref() {
            parse_date(birth)?;
        }
        Ok(())
    }

    pub fn into_params(self, id: i64) -> Result<UpdateUserParams, ApiError> {
        let birth = self.birth.as_deref().map(parse_date).transpose()?;
        let password_hash = self
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;
        Ok(UpdateUserParams {
            id,
            user_type: self.user_type,
            name: self.name,
            email: self.email,
            password_hash,
            phone: self.phone,
            birth,
            active: self.active,
        })
    }
}

pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("failed to hash password: {e}")))
}

async fn list_users(
    State(db): State<PgPool>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    query.validate()?;
    let users = UserService::new(db)
        .list_users(query.limit(), query.offset())
        .await?;
    Ok(Json(users))
}

async fn list_active_users(
    State(db): State<PgPool>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    query.validate()?;
    let users = UserService::new(db)
        .list_active_users(query.limit(), query.offset())
        .await?;
    Ok(Json(users))
}

async fn list_all_users(
    State(db): State<PgPool>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    query.validate()?;
    let users = UserService::new(db)
        .list_all_users(query.limit(), query.offset())
        .await?;
    Ok(Json(users))
}

async fn get_user(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    validate_id(id)?;
    let user = UserService::new(db)
        .get_user(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

async fn create_user(
    State(db): State<PgPool>,
    WithRejection(Json(req), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> Result<Json<User>, ApiError> {
    req.validate()?;
    let user = UserService::new(db).create_user(req.into_params()?).await?;
    tracing::info!(user_id = user.id, "created user");
    Ok(Json(user))
}

async fn update_user(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateUserRequest>, ApiError>,
) -> Result<Json<User>, ApiError> {
    validate_id(id)?;
    req.validate()?;
    let user = UserService::new(db)
        .update_user(req.into_params(id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

async fn delete_user(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    validate_id(id)?;
    if !UserService::new(db).delete_user(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::OK)
}
