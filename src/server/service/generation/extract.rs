//! Recognition of the image provider's response shapes.
//!
//! Providers behind the same endpoint have answered in four different layouts over time.
//! All of them stay supported and are tried in a fixed order:
//!
//! 1. `{"data": [{"url" | "b64_json": ...}]}`
//! 2. `{"image": {"url" | "b64_json": ...}}`
//! 3. `{"url": ...}`
//! 4. `{"images": [{"url" | "b64_json": ...} | "<url>"]}`
//!
//! A shape only matches when it yields a non-empty string; otherwise the next one is tried.

use serde_json::Value;

/// Extracts the generated asset reference (URL or base64 payload) from a provider response.
///
/// # Returns
/// - `Some(String)` - Reference from the first shape that matched
/// - `None` - No known shape matched
pub fn extract_image_url(data: &Value) -> Option<String> {
    first_item(data, "data")
        .and_then(url_or_b64)
        .or_else(|| data.get("image").and_then(url_or_b64))
        .or_else(|| non_empty_str(data.get("url")))
        .or_else(|| {
            first_item(data, "images")
                .and_then(|item| url_or_b64(item).or_else(|| non_empty_str(Some(item))))
        })
}

fn first_item<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key)?.as_array()?.first()
}

fn url_or_b64(item: &Value) -> Option<String> {
    non_empty_str(item.get("url")).or_else(|| non_empty_str(item.get("b64_json")))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
