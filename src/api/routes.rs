use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::training_feedback::training_feedback_routes;
use super::trainings::training_routes;
use super::users::user_routes;

pub fn create_routes(db: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(user_routes())
        .merge(training_routes())
        .merge(training_feedback_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
