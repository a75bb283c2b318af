use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
};
use url::Url;

use crate::{
    model::api::MessageDto,
    server::{
        adapter::{ApiRequest, ApiResponse},
        state::AppState,
    },
};

/// Forwards any request on `/api/{endpoint}` to the request adapter.
///
/// Rebuilds the absolute request URL from the `Host` header so handlers see the same URL
/// the client used, then dispatches on the endpoint name.
///
/// # Arguments
/// - `state` - Application state holding the request adapter
/// - `endpoint` - Endpoint name from the path
/// - `method` - Request method
/// - `uri` - Original request URI, including the query string
/// - `headers` - Request headers
/// - `body` - Raw request body
///
/// # Returns
/// - `400 Bad Request` - The request URL could not be reconstructed
/// - Otherwise whatever the adapter produced for the endpoint
pub async fn dispatch(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: String,
) -> ApiResponse {
    let url = match request_url(&headers, &uri) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Could not build request URL for {}: {}", uri, e);
            return ApiResponse::json(
                StatusCode::BAD_REQUEST,
                &MessageDto::new("Invalid request URL"),
            );
        }
    };

    let request =
        ApiRequest::new(method, url, headers, body).with_path_param("endpoint", endpoint.as_str());

    state.adapter.dispatch(&endpoint, request).await
}

fn request_url(headers: &HeaderMap, uri: &Uri) -> Result<Url, url::ParseError> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let path = uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or("/");

    Url::parse(&format!("http://{}", host))?.join(path)
}
