//! Handler reply shapes and the canonical outbound response.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::server::error::handler::HandlerError;

/// Serverless-style reply: `{statusCode, headers, body}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl EventResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Default::default()
        }
    }

    /// Serializes `value` as the body and sets `Content-Type: application/json`.
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::new(status_code)
            .with_header("Content-Type", "application/json")
            .with_body(serde_json::to_string(value)?))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Fetch-style reply: a status, a header map and an optional text body.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<String>,
}

impl FetchResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Serializes `value` as the body and sets `Content-Type: application/json`.
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::new(status)
            .with_header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )
            .with_body(serde_json::to_string(value)?))
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Inserts every header from `headers`, replacing existing values of the same name.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        for (name, value) in headers.iter() {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

}

/// Whatever a handler hands back to the adapter.
#[derive(Debug, Clone)]
pub enum HandlerReply {
    Event(EventResponse),
    Fetch(FetchResponse),
    /// A bare value with no response framing; sent as a 200 JSON body. The adapter also
    /// uses `Payload(Null)` when a handler declined both conventions.
    Payload(serde_json::Value),
}

impl HandlerReply {
    /// Whether the reply carries its own status and headers.
    pub fn is_response(&self) -> bool {
        matches!(self, Self::Event(_) | Self::Fetch(_))
    }
}

/// Canonical outbound response produced by the adapter for every request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Serializes `value` into a JSON response.
    ///
    /// Only used for the adapter's own envelopes, which contain nothing but strings; a
    /// serialization failure is still logged and degrades to an empty JSON object.
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        let body = serde_json::to_string(value).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize response body: {}", e);
            "{}".to_string()
        });

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Self {
            status,
            headers,
            body,
        }
    }

    /// Normalizes a handler reply.
    ///
    /// Headers are copied verbatim.
    ///
    /// # Returns
    /// - `Ok(ApiResponse)` - The normalized response
    /// - `Err(HandlerError::Internal)` - An event reply carried an invalid status code or
    ///   header
    pub fn from_reply(reply: HandlerReply) -> Result<Self, HandlerError> {
        match reply {
            HandlerReply::Fetch(response) => Ok(Self {
                status: response.status,
                headers: response.headers,
                body: response.body.unwrap_or_default(),
            }),
            HandlerReply::Event(response) => Self::from_event(response),
            HandlerReply::Payload(value) => Ok(Self::json(StatusCode::OK, &value)),
        }
    }

    fn from_event(response: EventResponse) -> Result<Self, HandlerError> {
        let status = StatusCode::from_u16(response.status_code).map_err(|_| {
            HandlerError::Internal(format!("Invalid status code {}", response.status_code))
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in response.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|_| HandlerError::Internal(format!("Invalid header name '{}'", name)))?;
            let header_value = HeaderValue::try_from(value.as_str()).map_err(|_| {
                HandlerError::Internal(format!("Invalid value for header '{}'", name))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(Self {
            status,
            headers,
            body: response.body,
        })
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
