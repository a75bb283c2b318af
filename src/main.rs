mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    adapter::RequestAdapter, config::Config, error::AppError, handler, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    startup::log_environment(&config);

    let db = startup::initialize_database(&config).await;
    let http_client = startup::setup_reqwest_client()?;

    let registry = handler::registry(&config, db, http_client);
    let handler_names = registry.names().collect::<Vec<_>>().join(", ");

    let app = router::router(
        AppState::new(RequestAdapter::new(registry)),
        &config.static_dir,
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Server running on port {}", config.port);
    tracing::info!("Serving static files from {}", config.static_dir.display());
    tracing::info!("Available API handlers: {}", handler_names);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
