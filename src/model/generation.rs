use serde::{Deserialize, Serialize};

/// Request body accepted by `POST /api/generate-images`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesDto {
    #[serde(default)]
    pub prompt: String,
    #[serde(default, alias = "imageCount", alias = "count")]
    pub number_of_images: Option<i64>,
}

/// A single generated image as returned to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImageDto {
    pub id: String,
    /// Hosted URL or base64 payload, whichever the provider returned.
    pub url: String,
    pub prompt: String,
}

/// Success envelope for a generation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImagesResponseDto {
    pub images: Vec<GeneratedImageDto>,
}

/// Diagnostic context attached to generation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfoDto {
    pub api_key_present: bool,
    pub model: String,
    pub endpoint: String,
}

/// Failure envelope for a generation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailureDto {
    pub message: String,
    pub debug_info: DebugInfoDto,
}
