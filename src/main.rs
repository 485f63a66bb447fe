use healthcare_backend::config::{run_migrations, AppConfig, DatabaseConfig};
use healthcare_backend::middleware::setup_logging;
use healthcare_backend::routes::create_router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    setup_logging();

    tracing::info!("Starting application...");

    // Load configurations
    let app_config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);

    // Create database connection pool
    let db_pool = db_config.create_pool().await?;
    tracing::info!("Database connection pool created");

    // Apply pending migrations
    run_migrations(&db_pool).await?;
    tracing::info!("Database migrations applied");

    // Create router
    let app = create_router(db_pool.clone())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Create server address
    let addr = app_config.server_address();
    tracing::info!("Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // In-flight writes finish before exit
    db_pool.close().await;
    tracing::info!("Database connection pool closed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
