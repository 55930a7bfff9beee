use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use sqlx::PgPool;

pub async fn health_check(State(db): State<PgPool>) -> Result<Json<Value>, StatusCode> {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&db).await {
        Ok(_) => Ok(Json(json!({ "status": "ok", "database": "connected" }))),
        Err(err) => {
            tracing::warn!("health check failed: {err}");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
