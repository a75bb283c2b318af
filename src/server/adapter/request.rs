//! Canonical inbound request and its two handler-facing shapes.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, Method};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// Convention-neutral view of one inbound HTTP request.
///
/// Built once by the controller from the transport request and never mutated afterwards.
/// Handlers never see this type directly; they receive either [`HandlerEvent`] or
/// [`FetchRequest`], both derived from it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<String>,
    query: BTreeMap<String, String>,
    path_params: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Creates a request from its transport parts.
    ///
    /// The body is discarded for GET and HEAD. Query parameters are decoded from `url`;
    /// when a key repeats, the last value wins.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `url` - Absolute request URL including query string
    /// - `headers` - Request headers as received
    /// - `body` - Raw body text
    pub fn new(method: Method, url: Url, headers: HeaderMap, body: String) -> Self {
        let body = if method == Method::GET || method == Method::HEAD {
            None
        } else {
            Some(body)
        };
        let query = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Self {
            method,
            url,
            headers,
            body,
            query,
            path_params: BTreeMap::new(),
        }
    }

    /// Adds a resolved path parameter such as `endpoint`.
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Translates into the serverless event shape.
    pub fn to_event(&self) -> HandlerEvent {
        HandlerEvent {
            http_method: self.method.as_str().to_string(),
            headers: flatten_headers(&self.headers),
            body: self.body.clone(),
            query_string_parameters: self.query.clone(),
            path_parameters: self.path_params.clone(),
        }
    }

    /// Translates into the Fetch-style request shape.
    pub fn to_fetch_request(&self) -> FetchRequest {
        FetchRequest {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

/// Serverless-function event: `{httpMethod, headers, body, queryStringParameters, pathParameters}`.
///
/// Header names are lowercase. Repeated headers are joined with `", "`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerEvent {
    pub http_method: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    pub query_string_parameters: BTreeMap<String, String>,
    pub path_parameters: BTreeMap<String, String>,
}

/// Fetch-style request: method, URL, headers and an optional body.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<String>,
}

impl FetchRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body text, empty when the request carried none.
    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.text())
    }
}

fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flattened: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        flattened
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }

    flattened
}
