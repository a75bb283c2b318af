//! Endpoint handlers served under `/api/{endpoint}`.
//!
//! Each handler is written against one calling convention and registered under the
//! endpoint name it answers to. Handlers set their own CORS headers on every response,
//! including `OPTIONS` preflights, independently of the router's CORS layer.

pub mod generate_images;
pub mod health_check;

#[cfg(test)]
mod test;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use sea_orm::DatabaseConnection;

use crate::server::{
    adapter::HandlerRegistry, config::Config, service::generation::ImageGenerationService,
};

pub use generate_images::GenerateImagesHandler;
pub use health_check::HealthCheckHandler;

/// CORS headers a handler attaches to its responses.
#[derive(Debug, Clone, Copy)]
pub struct CorsHeaders {
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
}

impl CorsHeaders {
    /// Header name/value pairs, names lowercase.
    pub fn pairs(&self) -> [(&'static str, &'static str); 4] {
        [
            ("access-control-allow-credentials", "true"),
            ("access-control-allow-origin", "*"),
            ("access-control-allow-methods", self.allow_methods),
            ("access-control-allow-headers", self.allow_headers),
        ]
    }

    pub fn header_map(&self) -> HeaderMap {
        self.pairs()
            .into_iter()
            .map(|(name, value)| (HeaderName::from_static(name), HeaderValue::from_static(value)))
            .collect()
    }
}

/// Builds the registry of every endpoint the backend serves.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection, or `None` when startup could not connect
/// - `http_client` - Shared HTTP client for upstream calls
///
/// # Returns
/// - `HandlerRegistry` - Registry with `generate-images` and `health-check`
pub fn registry(
    config: &Config,
    db: Option<DatabaseConnection>,
    http_client: reqwest::Client,
) -> HandlerRegistry {
    HandlerRegistry::builder()
        .register_fetch(
            "generate-images",
            GenerateImagesHandler::new(
                config.clone(),
                ImageGenerationService::new(http_client)
                    .with_call_timeout(config.generation_timeout),
            ),
        )
        .register_event("health-check", HealthCheckHandler::new(config.clone(), db))
        .build()
}
