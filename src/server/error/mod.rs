//! Error types for the backend.
//!
//! `AppError` is the top-level type returned while the process starts up. Request-time
//! failures never surface as `AppError`: handlers return `HandlerError`, which the request
//! adapter turns into a 500 response, and the generation orchestrator reports
//! `GenerationError` to its handler.

pub mod config;
pub mod generation;
pub mod handler;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Failed to bind the listener or serve connections.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}
