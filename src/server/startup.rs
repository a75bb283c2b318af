use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::global_settings::GlobalSettingsRepository, error::AppError,
};

/// Installs the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Logs the upstream configuration without revealing the API key.
pub fn log_environment(config: &Config) {
    tracing::info!("Image API key present: {}", config.api_key_present());
    tracing::info!("Provider model: {}", config.provider_model);
    tracing::info!("Image API endpoint: {}", config.api_endpoint);
    tracing::info!(
        "Generation call timeout: {} ms",
        config.generation_timeout.as_millis()
    );

    if !config.api_key_present() {
        tracing::error!(
            "CRITICAL: No image API key configured. Set NEW_API_KEY or API_KEY; image generation requests will fail."
        );
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects, migrates and seeds the database.
///
/// Failures are logged rather than returned: the server still starts without a database,
/// and the health check reports it as disconnected.
///
/// # Returns
/// - `Some(DatabaseConnection)` - Database ready with the global settings row present
/// - `None` - Connecting, migrating or seeding failed
pub async fn initialize_database(config: &Config) -> Option<DatabaseConnection> {
    let db = match connect_to_database(config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            return None;
        }
    };

    match GlobalSettingsRepository::new(&db).ensure_default().await {
        Ok((_, true)) => tracing::info!("Created default global settings"),
        Ok((_, false)) => tracing::debug!("Global settings already present"),
        Err(e) => {
            tracing::error!("Failed to seed global settings: {}", e);
            return None;
        }
    }

    tracing::info!("Database initialized");

    Some(db)
}

/// Builds the HTTP client used for upstream image API calls.
///
/// Redirects are disabled so the bearer credential is only ever sent to the configured
/// endpoint.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
