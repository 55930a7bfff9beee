use anyhow::Result;
use sqlx::PgPool;

use crate::models::{CreateUserParams, UpdateUserParams, User};

const USER_COLUMNS: &str =
    "id, type, name, email, password_hash, phone, birth, active, created_at, deleted_at";

pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_user(&self, params: CreateUserParams) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (type, name, email, password_hash, phone, birth, active)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(params.user_type)
        .bind(params.name)
        .bind(params.email)
        .bind(params.password_hash)
        .bind(params.phone)
        .bind(params.birth)
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    pub async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE deleted_at IS NULL ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    pub async fn list_active_users(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE deleted_at IS NULL AND active ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    /// Includes soft-deleted and inactive users.
    pub async fn list_all_users(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    pub async fn update_user(&self, params: UpdateUserParams) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET type = COALESCE($2, type),
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                password_hash = COALESCE($5, password_hash),
                phone = COALESCE($6, phone),
                birth = COALESCE($7, birth),
                active = COALESCE($8, active)
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(params.id)
        .bind(params.user_type)
        .bind(params.name)
        .bind(params.email)
        .bind(params.password_hash)
        .bind(params.phone)
        .bind(params.birth)
        .bind(params.active)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    /// Soft delete. Returns false when the user does not exist or is
    /// already deleted.
    pub async fn delete_user(&self, user_id: i64) -> Result<bool> {
        let result =
            sqlx::query("UPDATE users SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL")
                .bind(user_id)
                .execute(&self.db)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
