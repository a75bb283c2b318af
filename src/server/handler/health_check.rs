use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::MessageDto,
        health::{ApiHealthDto, DatabaseHealthDto, EnvironmentDto, HealthDto},
    },
    server::{
        adapter::{EventHandler, EventResponse, HandlerEvent},
        config::Config,
        error::handler::HandlerError,
        handler::CorsHeaders,
    },
};

const CORS: CorsHeaders = CorsHeaders {
    allow_methods: "GET,OPTIONS",
    allow_headers: "Content-Type",
};

/// Reports process, upstream configuration and database status.
pub struct HealthCheckHandler {
    config: Config,
    db: Option<DatabaseConnection>,
}

impl HealthCheckHandler {
    pub fn new(config: Config, db: Option<DatabaseConnection>) -> Self {
        Self { config, db }
    }

    async fn database_connected(&self) -> bool {
        match &self.db {
            Some(db) => match db.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Health check database ping failed: {}", e);
                    false
                }
            },
            None => false,
        }
    }
}

#[async_trait]
impl EventHandler for HealthCheckHandler {
    /// Answers `GET` with the health report and `OPTIONS` with an empty 200.
    ///
    /// # Returns
    /// - `Ok(EventResponse)` - 200 report, 200 preflight, or 405 for any other method
    /// - `Err(HandlerError::Serialization)` - Failed to encode the report
    async fn handle(&self, event: HandlerEvent) -> Result<EventResponse, HandlerError> {
        match event.http_method.as_str() {
            "OPTIONS" => return Ok(EventResponse::new(200).with_headers(CORS.pairs())),
            "GET" => {}
            _ => {
                return Ok(EventResponse::json(405, &MessageDto::new("Method Not Allowed"))?
                    .with_headers(CORS.pairs()))
            }
        }

        let health = HealthDto {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            environment: EnvironmentDto {
                version: env!("CARGO_PKG_VERSION").to_string(),
                platform: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            },
            api: ApiHealthDto {
                image_api_key_present: self.config.api_key_present(),
                image_endpoint: self.config.api_endpoint.clone(),
                provider_model: self.config.provider_model.clone(),
            },
            database: DatabaseHealthDto {
                database_url: if self.config.database_url_configured {
                    "configured".to_string()
                } else {
                    "missing".to_string()
                },
                connected: self.database_connected().await,
            },
        };

        Ok(EventResponse::json(200, &health)?.with_headers(CORS.pairs()))
    }
}
