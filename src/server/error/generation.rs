use std::time::Duration;

use thiserror::Error;

/// Failure of a single slot in a generation batch.
///
/// Never leaves the orchestrator: each one is logged against its slot and turned into
/// an empty result.
#[derive(Error, Debug)]
pub enum SlotError {
    /// The call did not complete before its timeout and was dropped.
    #[error("Request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection, TLS or body transfer failure.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    ///
    /// Holds the provider's own error message when one could be parsed, otherwise
    /// `HTTP Error: <status> <reason>`.
    #[error("{0}")]
    Upstream(String),

    /// 2xx body that was not JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// 2xx JSON body matching none of the known image response shapes.
    #[error("Response did not contain an image")]
    UnrecognizedResponse,
}

/// Failure of a whole generation batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Every slot in the batch failed.
    #[error("No images generated. Please try a different prompt.")]
    NoImagesGenerated,
}
