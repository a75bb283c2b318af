use serde::{Deserialize, Serialize};

/// Plain `{ "message": ... }` body used for client errors such as 400 and 405.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned when `/api/{endpoint}` names no registered handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointNotFoundDto {
    pub message: String,
    /// Registered endpoints as full paths, e.g. `/api/health-check`.
    pub available_endpoints: Vec<String>,
}

/// Body returned when a handler fails at the adapter boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalErrorDto {
    pub message: String,
    pub error: String,
}
