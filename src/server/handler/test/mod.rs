use std::collections::HashMap;

use axum::{
    http::{HeaderMap, Method, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, server::TestServer};
use url::Url;

use crate::server::{
    adapter::{ApiRequest, ApiResponse, RequestAdapter},
    config::Config,
    handler,
};

mod health_check;

fn config(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

fn adapter(config: &Config, db: Option<sea_orm::DatabaseConnection>) -> RequestAdapter {
    RequestAdapter::new(handler::registry(config, db, reqwest::Client::new()))
}

async fn call(adapter: &RequestAdapter, endpoint: &str, method: Method, body: &str) -> ApiResponse {
    let url = Url::parse(&format!("http://localhost:3000/api/{}", endpoint)).unwrap();
    let request = ApiRequest::new(method, url, HeaderMap::new(), body.to_string())
        .with_path_param("endpoint", endpoint);

    adapter.dispatch(endpoint, request).await
}

fn body_json(response: &ApiResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}
