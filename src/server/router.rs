use std::path::Path;

use axum::{
    http::{header, HeaderValue},
    routing::any,
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

use crate::server::{controller::api::dispatch, state::AppState};

/// Builds the application router.
///
/// `/api/{endpoint}` accepts any method, `OPTIONS` included, and goes to the request
/// adapter, so each handler answers its own preflights. Every other path is served from
/// `static_dir`, with unknown paths answered by its `index.html` so the frontend can handle
/// client-side routes. Responses without an `Access-Control-Allow-Origin` header get `*`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `static_dir` - Directory holding the built frontend
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/{endpoint}", any(dispatch))
        .fallback_service(frontend)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}
