use hello_service::config::Settings;
use hello_service::observability::init_tracing;
use hello_service::services::MongoDb;
use hello_service::startup::Application;
use std::time::Duration;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let settings = Settings::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Connect to database before accepting any traffic
    let deadline = Duration::from_secs(settings.mongodb.connect_timeout_secs);
    let db = MongoDb::connect(&settings.mongodb.uri, deadline)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            std::io::Error::other(format!("Database connection error: {}", e))
        })?;

    let app = Application::build(settings, db).await.map_err(|e| {
        tracing::error!("Failed to start server: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Server is running on port {}", app.port());

    app.run_until_stopped().await
}
