use thiserror::Error;

/// Failure raised from inside an endpoint handler.
///
/// Handlers answer expected client mistakes (bad method, bad body) with ordinary responses.
/// A `HandlerError` means the handler could not produce a response at all; the request
/// adapter logs it and replies with 500, exposing only `Display` output as the `error` field.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Failed to serialize a response body.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database operation failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The handler future panicked.
    #[error("Handler panicked: {0}")]
    Panicked(String),

    /// Any other unexpected failure.
    #[error("{0}")]
    Internal(String),
}
