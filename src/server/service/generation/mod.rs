//! Parallel image generation against the external provider.
//!
//! A batch issues N independent calls at once and waits for every one of them to settle.
//! Each call has its own timeout and its own failure: a slot that errors, times out, or
//! returns an unrecognized body is logged and contributes nothing, while the other slots
//! carry on. Only a batch in which every slot failed is reported as an error.

pub mod extract;
pub mod fetch;

#[cfg(test)]
mod test;

use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use reqwest::StatusCode;
use serde_json::Value;

use crate::server::{
    error::generation::{GenerationError, SlotError},
    model::generation::{GeneratedImage, GenerationRequest},
    service::generation::{extract::extract_image_url, fetch::fetch_with_timeout},
};

/// Per-call timeout used for generation batches.
pub const GENERATION_CALL_TIMEOUT: Duration = Duration::from_millis(25_000);

/// Issues generation batches against the image provider.
#[derive(Clone)]
pub struct ImageGenerationService {
    http_client: reqwest::Client,
    call_timeout: Duration,
}

impl ImageGenerationService {
    /// Creates a service using [`GENERATION_CALL_TIMEOUT`] for every call.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            call_timeout: GENERATION_CALL_TIMEOUT,
        }
    }

    /// Overrides the per-call timeout.
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Generates up to `count` images concurrently.
    ///
    /// Launches `count` calls at once, each with exactly one attempt. Slot failures are
    /// logged with their 1-based image number and dropped. The result keeps slot order.
    ///
    /// # Arguments
    /// - `count` - Number of calls to issue
    /// - `request` - Provider request shared by every call
    ///
    /// # Returns
    /// - `Ok(Vec<GeneratedImage>)` - Between 1 and `count` images
    /// - `Err(GenerationError::NoImagesGenerated)` - Every slot failed (or `count` was 0)
    pub async fn generate_batch(
        &self,
        count: usize,
        request: &GenerationRequest,
    ) -> Result<Vec<GeneratedImage>, GenerationError> {
        let slots = (0..count).map(|index| self.generate_slot(index, count, request));

        let images: Vec<GeneratedImage> = join_all(slots).await.into_iter().flatten().collect();

        if images.is_empty() {
            return Err(GenerationError::NoImagesGenerated);
        }

        tracing::info!("Generated {} of {} requested images", images.len(), count);

        Ok(images)
    }

    async fn generate_slot(
        &self,
        index: usize,
        count: usize,
        request: &GenerationRequest,
    ) -> Option<GeneratedImage> {
        tracing::debug!("Generating image {} of {}", index + 1, count);

        match fetch_with_timeout(Some(self.call_timeout), self.request_image(request)).await {
            Ok(url) => {
                tracing::info!("Image {} generated successfully", index + 1);

                Some(GeneratedImage {
                    id: format!("img-{}-{}", Utc::now().timestamp_millis(), index),
                    url,
                    prompt: request.prompt.clone(),
                })
            }
            Err(e) => {
                tracing::error!("Failed to generate image {}: {}", index + 1, e);
                None
            }
        }
    }

    async fn request_image(&self, request: &GenerationRequest) -> Result<String, SlotError> {
        let response = self
            .http_client
            .post(&request.endpoint)
            .bearer_auth(&request.api_key)
            .json(&request.payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("Provider error response ({}): {}", status, body);
            return Err(SlotError::Upstream(upstream_error_message(status, &body)));
        }

        let data: Value = serde_json::from_str(&body)?;

        extract_image_url(&data).ok_or(SlotError::UnrecognizedResponse)
    }
}

/// Picks the most useful message out of a provider error response.
///
/// Tries `error.message`, then `message`, then falls back to the status line.
pub fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok().and_then(|data| {
        [&data["error"]["message"], &data["message"]]
            .into_iter()
            .find_map(|value| value.as_str().filter(|s| !s.is_empty()))
            .map(str::to_string)
    });

    parsed.unwrap_or_else(|| {
        format!(
            "HTTP Error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )
        .trim_end()
        .to_string()
    })
}
