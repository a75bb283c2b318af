//! Image generation domain models.

use serde_json::json;

use crate::model::generation::GeneratedImageDto;

/// Upper bound on images produced by one request.
pub const MAX_IMAGES_PER_REQUEST: usize = 4;

/// Image size requested from the provider.
pub const IMAGE_SIZE: &str = "1024x1024";

/// Everything needed to issue one call to the image provider.
///
/// Shared by every slot of a batch; slots only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Provider endpoint URL.
    pub endpoint: String,
    /// Bearer credential.
    pub api_key: String,
    /// JSON body sent with each call.
    pub payload: serde_json::Value,
    /// User prompt, echoed back on every generated image.
    pub prompt: String,
}

impl GenerationRequest {
    /// Builds the provider request for a single image of `prompt` with `model`.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: &str,
        prompt: impl Into<String>,
    ) -> Self {
        let prompt = prompt.into();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            payload: json!({
                "model": model,
                "prompt": prompt,
                "n": 1,
                "size": IMAGE_SIZE,
            }),
            prompt,
        }
    }
}

/// One successfully generated image.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// `img-<unix millis>-<slot index>`.
    pub id: String,
    /// Hosted URL or base64 payload.
    pub url: String,
    pub prompt: String,
}

impl GeneratedImage {
    pub fn into_dto(self) -> GeneratedImageDto {
        GeneratedImageDto {
            id: self.id,
            url: self.url,
            prompt: self.prompt,
        }
    }
}

/// Clamps a requested image count into `1..=MAX_IMAGES_PER_REQUEST`.
///
/// A missing count means one image.
pub fn clamp_image_count(requested: Option<i64>) -> usize {
    let requested = requested.unwrap_or(1).clamp(1, MAX_IMAGES_PER_REQUEST as i64);
    requested as usize
}
