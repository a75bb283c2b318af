use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use test_utils::server::TestServer;

use crate::server::{
    error::generation::GenerationError,
    model::generation::GenerationRequest,
    service::generation::{upstream_error_message, ImageGenerationService},
};


const API_KEY: &str = "test-key";

/// What the fake provider does with the n-th call it receives (0-based arrival order).
#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode, String),
    Hang,
}

#[derive(Clone)]
struct Upstream {
    calls: Arc<AtomicUsize>,
    reply: Arc<dyn Fn(usize) -> Reply + Send + Sync>,
}

async fn upstream_handler(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let arrival = upstream.calls.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {}", API_KEY).as_str());
    if !authorized || payload["prompt"].is_null() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Invalid API key" } })),
        )
            .into_response();
    }

    match (upstream.reply)(arrival) {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Status(status, body) => (status, body).into_response(),
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::GATEWAY_TIMEOUT.into_response()
        }
    }
}

/// Starts a fake provider and returns it with its call counter.
async fn spawn_upstream<F>(reply: F) -> (TestServer, Arc<AtomicUsize>)
where
    F: Fn(usize) -> Reply + Send + Sync + 'static,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let state = Upstream {
        calls: calls.clone(),
        reply: Arc::new(reply),
    };
    let router = Router::new()
        .route("/v1/images/generations", post(upstream_handler))
        .with_state(state);

    let server = TestServer::spawn(router).await.unwrap();
    (server, calls)
}

fn generation_request(server: &TestServer) -> GenerationRequest {
    GenerationRequest::new(
        server.url("/v1/images/generations"),
        API_KEY,
        "provider-4/imagen-3.5",
        "a lighthouse at dusk",
    )
}

fn image_body(url: &str) -> Value {
    json!({ "data": [{ "url": url }] })
}
