use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::server::{
    adapter::{
        registry::HandlerRegistry, ApiRequest, EventResponse, FetchResponse, Handler,
        HandlerReply, Invocation, RequestAdapter,
    },
    error::handler::HandlerError,
};


type Respond = dyn Fn(&Invocation) -> Result<Option<HandlerReply>, HandlerError> + Send + Sync;

/// Handler that records which conventions it was called with.
struct StubHandler {
    seen: Arc<Mutex<Vec<&'static str>>>,
    respond: Box<Respond>,
}

impl StubHandler {
    fn new<F>(respond: F) -> (Self, Arc<Mutex<Vec<&'static str>>>)
    where
        F: Fn(&Invocation) -> Result<Option<HandlerReply>, HandlerError> + Send + Sync + 'static,
    {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler = Self {
            seen: seen.clone(),
            respond: Box::new(respond),
        };
        (handler, seen)
    }
}

#[async_trait]
impl Handler for StubHandler {
    async fn call(&self, invocation: Invocation) -> Result<Option<HandlerReply>, HandlerError> {
        let convention = match invocation {
            Invocation::Event(_) => "event",
            Invocation::Fetch(_) => "fetch",
        };
        self.seen.lock().unwrap().push(convention);

        (self.respond)(&invocation)
    }
}

fn adapter_with(name: &str, handler: StubHandler) -> RequestAdapter {
    RequestAdapter::new(HandlerRegistry::builder().register(name, handler).build())
}

fn request(method: Method, body: &str) -> ApiRequest {
    let url = Url::parse("http://localhost:3000/api/test?page=2").unwrap();
    ApiRequest::new(method, url, HeaderMap::new(), body.to_string())
        .with_path_param("endpoint", "test")
}

fn body_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}
