use std::path::PathBuf;

use axum::http::StatusCode;
use reqwest::Method;
use serde_json::Value;
use test_utils::server::TestServer;

use crate::server::{
    adapter::RequestAdapter, config::Config, handler, router::router, state::AppState,
};

mod frontend;

const INDEX_HTML: &str = "<!doctype html><title>Image Studio</title>";

/// Writes a minimal built frontend into a fresh temporary directory.
fn frontend_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "image-studio-{}-{}",
        name,
        std::process::id()
    ));
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.join("assets/app.js"), "console.log('app');").unwrap();
    dir
}

/// Serves the full application router without a database or API key.
async fn spawn_app(name: &str) -> TestServer {
    let config = Config::from_lookup(|_| None).unwrap();
    let adapter = RequestAdapter::new(handler::registry(&config, None, reqwest::Client::new()));
    let app = router(AppState::new(adapter), &frontend_dir(name));

    TestServer::spawn(app).await.unwrap()
}
