//! Request adapter between the HTTP transport and endpoint handlers.
//!
//! Handlers exist in two calling conventions: serverless-function style, which takes an
//! event object and returns `{statusCode, headers, body}`, and Fetch style, which takes a
//! Request and returns a Response. The adapter keeps one canonical request
//! ([`ApiRequest`]) and one canonical response ([`ApiResponse`]) and translates to and from
//! each convention at the edges, so handlers of either kind sit behind the same route.
//!
//! # Dispatch
//!
//! 1. Resolve the endpoint name in the [`HandlerRegistry`]; unknown names get a 404 that
//!    lists what is registered.
//! 2. Invoke the handler with the event shape.
//! 3. If the reply is not a framed response, invoke it once more with the Fetch shape.
//! 4. Normalize the final reply into an [`ApiResponse`].
//!
//! Handler errors and panics are contained here and become 500 responses.

pub mod handler;
pub mod registry;
pub mod request;
pub mod response;

#[cfg(test)]
mod test;

use std::{any::Any, panic::AssertUnwindSafe};

use axum::http::StatusCode;
use futures::FutureExt;

pub use handler::{EventHandler, FetchHandler, Handler, Invocation};
pub use registry::HandlerRegistry;
pub use request::{ApiRequest, FetchRequest, HandlerEvent};
pub use response::{ApiResponse, EventResponse, FetchResponse, HandlerReply};

use crate::{
    model::api::{EndpointNotFoundDto, InternalErrorDto},
    server::error::handler::HandlerError,
};

/// Dispatches canonical requests to registered handlers.
///
/// Cheap to clone; all clones share one registry.
#[derive(Clone)]
pub struct RequestAdapter {
    registry: HandlerRegistry,
}

impl RequestAdapter {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Runs the handler registered as `endpoint` against `request`.
    ///
    /// Never fails: every outcome, including handler errors and panics, is expressed as
    /// a response.
    ///
    /// # Arguments
    /// - `endpoint` - Name taken from `/api/{endpoint}`
    /// - `request` - Canonical inbound request
    ///
    /// # Returns
    /// - 404 with `availableEndpoints` - No handler registered under `endpoint`
    /// - 500 with `message` and `error` - The handler failed or panicked
    /// - Otherwise the handler's own response, normalized
    pub async fn dispatch(&self, endpoint: &str, request: ApiRequest) -> ApiResponse {
        let Some(handler) = self.registry.get(endpoint) else {
            return self.not_found(endpoint);
        };

        match invoke(handler.as_ref(), &request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Error handling API request to {}: {}", endpoint, err);

                ApiResponse::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &InternalErrorDto {
                        message: "Internal Server Error".to_string(),
                        error: err.to_string(),
                    },
                )
            }
        }
    }

    fn not_found(&self, endpoint: &str) -> ApiResponse {
        ApiResponse::json(
            StatusCode::NOT_FOUND,
            &EndpointNotFoundDto {
                message: format!("API endpoint not found: /api/{}", endpoint),
                available_endpoints: self
                    .registry
                    .names()
                    .map(|name| format!("/api/{}", name))
                    .collect(),
            },
        )
    }
}

/// Event convention first, then exactly one Fetch-convention retry if the first reply
/// was not a framed response. A handler that declines both is answered with JSON `null`.
async fn invoke(handler: &dyn Handler, request: &ApiRequest) -> Result<ApiResponse, HandlerError> {
    let reply = match call_contained(handler, Invocation::Event(request.to_event())).await? {
        Some(reply) if reply.is_response() => reply,
        _ => call_contained(handler, Invocation::Fetch(request.to_fetch_request()))
            .await?
            .unwrap_or(HandlerReply::Payload(serde_json::Value::Null)),
    };

    ApiResponse::from_reply(reply)
}

async fn call_contained(
    handler: &dyn Handler,
    invocation: Invocation,
) -> Result<Option<HandlerReply>, HandlerError> {
    AssertUnwindSafe(handler.call(invocation))
        .catch_unwind()
        .await
        .map_err(|panic| HandlerError::Panicked(panic_message(panic)))?
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
