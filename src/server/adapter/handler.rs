//! Handler traits for both calling conventions.

use async_trait::async_trait;

use crate::server::{
    adapter::{
        request::{FetchRequest, HandlerEvent},
        response::{EventResponse, FetchResponse, HandlerReply},
    },
    error::handler::HandlerError,
};

/// One attempt to call a handler, in one of the two conventions.
#[derive(Debug, Clone)]
pub enum Invocation {
    Event(HandlerEvent),
    Fetch(FetchRequest),
}

/// Uniform interface the adapter dispatches through.
///
/// `Ok(None)` means the handler did not understand the invocation's calling convention.
/// Implement [`EventHandler`] or [`FetchHandler`] and wrap it in [`EventStyle`] or
/// [`FetchStyle`] rather than implementing this directly.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, invocation: Invocation) -> Result<Option<HandlerReply>, HandlerError>;
}

/// Handler written against the serverless event convention.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: HandlerEvent) -> Result<EventResponse, HandlerError>;
}

/// Handler written against the Fetch Request/Response convention.
#[async_trait]
pub trait FetchHandler: Send + Sync {
    async fn handle(&self, request: FetchRequest) -> Result<FetchResponse, HandlerError>;
}

/// Adapts an [`EventHandler`]; declines Fetch invocations.
pub struct EventStyle<H>(pub H);

/// Adapts a [`FetchHandler`]; declines event invocations.
pub struct FetchStyle<H>(pub H);

#[async_trait]
impl<H: EventHandler> Handler for EventStyle<H> {
    async fn call(&self, invocation: Invocation) -> Result<Option<HandlerReply>, HandlerError> {
        match invocation {
            Invocation::Event(event) => Ok(Some(HandlerReply::Event(self.0.handle(event).await?))),
            Invocation::Fetch(_) => Ok(None),
        }
    }
}

#[async_trait]
impl<H: FetchHandler> Handler for FetchStyle<H> {
    async fn call(&self, invocation: Invocation) -> Result<Option<HandlerReply>, HandlerError> {
        match invocation {
            Invocation::Fetch(request) => {
                Ok(Some(HandlerReply::Fetch(self.0.handle(request).await?)))
            }
            Invocation::Event(_) => Ok(None),
        }
    }
}
