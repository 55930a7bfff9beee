use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_type", rename_all = "snake_case")]
pub enum UserType {
    Admin,
    Coach,
    Athlete,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub user_type: UserType,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub birth: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert parameters for `users`, produced by the request mapper.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_type: UserType,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub birth: Option<NaiveDate>,
}

/// Update parameters for `users`. Absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i64,
    pub user_type: Option<UserType>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub birth: Option<NaiveDate>,
    pub active: Option<bool>,
}
