use std::{path::PathBuf, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    service::generation::GENERATION_CALL_TIMEOUT,
};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.a4f.co/v1/images/generations";
pub const DEFAULT_PROVIDER_MODEL: &str = "provider-4/imagen-3.5";
const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite?mode=rwc";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "dist";

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    /// Whether `DATABASE_URL` was set, as opposed to falling back to the local file.
    pub database_url_configured: bool,

    /// Bearer credential for the image API. `NEW_API_KEY` wins over `API_KEY`.
    pub api_key: Option<String>,
    pub provider_model: String,
    pub api_endpoint: String,
    /// Per-call timeout for generation batches, from `GENERATION_TIMEOUT_MS`.
    pub generation_timeout: Duration,

    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset so that a blank line in `.env` does not
    /// override a default.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for an environment variable name
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration with defaults applied
    /// - `Err(AppError::ConfigErr)` - A variable is present but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL");
        let port = match var("PORT") {
            Some(value) => parse_var("PORT", value)?,
            None => DEFAULT_PORT,
        };
        let generation_timeout = match var("GENERATION_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse_var("GENERATION_TIMEOUT_MS", value)?),
            None => GENERATION_CALL_TIMEOUT,
        };

        Ok(Self {
            database_url_configured: database_url.is_some(),
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            api_key: var("NEW_API_KEY").or_else(|| var("API_KEY")),
            provider_model: var("PROVIDER_MODEL")
                .unwrap_or_else(|| DEFAULT_PROVIDER_MODEL.to_string()),
            api_endpoint: var("API_ENDPOINT").unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            generation_timeout,
            port,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }

    pub fn api_key_present(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
