use runapp::api::routes::create_routes;
use runapp::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let db = db_config.create_pool().await?;
    run_migrations(&db).await?;

    let app = create_routes(db);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("runapp server starting on http://{}", config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
