use async_trait::async_trait;
use axum::http::{header, HeaderMap, Method, StatusCode};

use crate::{
    model::{
        api::MessageDto,
        generation::{DebugInfoDto, GenerateImagesDto, GenerateImagesResponseDto, GenerationFailureDto},
    },
    server::{
        adapter::{FetchHandler, FetchRequest, FetchResponse},
        config::Config,
        error::handler::HandlerError,
        handler::CorsHeaders,
        model::generation::{clamp_image_count, GeneratedImage, GenerationRequest},
        service::generation::ImageGenerationService,
    },
};

const CORS: CorsHeaders = CorsHeaders {
    allow_methods: "GET,OPTIONS,PATCH,DELETE,POST,PUT",
    allow_headers: "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
};

/// Generates a batch of images for a prompt.
pub struct GenerateImagesHandler {
    config: Config,
    service: ImageGenerationService,
}

impl GenerateImagesHandler {
    pub fn new(config: Config, service: ImageGenerationService) -> Self {
        Self { config, service }
    }

    fn reply<T: serde::Serialize>(
        status: StatusCode,
        body: &T,
        headers: HeaderMap,
    ) -> Result<FetchResponse, HandlerError> {
        Ok(FetchResponse::json(status, body)?.with_headers(headers))
    }

    /// 500 envelope carrying the upstream configuration for debugging.
    fn failure(&self, message: &str, headers: HeaderMap) -> Result<FetchResponse, HandlerError> {
        tracing::error!(
            "Image generation debug info: api key present: {}, model: {}, endpoint: {}",
            self.config.api_key_present(),
            self.config.provider_model,
            self.config.api_endpoint
        );

        Self::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            &GenerationFailureDto {
                message: message.to_string(),
                debug_info: DebugInfoDto {
                    api_key_present: self.config.api_key_present(),
                    model: self.config.provider_model.clone(),
                    endpoint: self.config.api_endpoint.clone(),
                },
            },
            headers,
        )
    }
}

#[async_trait]
impl FetchHandler for GenerateImagesHandler {
    /// Validates the request, runs one generation batch and reports the outcome.
    ///
    /// # Returns
    /// - `Ok(FetchResponse)` - 200 `{images}`, 200 preflight, 400 for a bad body or empty
    ///   prompt, 405 for methods other than `POST`, or 500 with `debugInfo` when no API key
    ///   is configured or no image was generated
    /// - `Err(HandlerError::Serialization)` - Failed to encode a response body
    async fn handle(&self, request: FetchRequest) -> Result<FetchResponse, HandlerError> {
        let headers = CORS.header_map();

        if request.method() == Method::OPTIONS {
            return Ok(FetchResponse::new(StatusCode::OK)
                .with_headers(headers)
                .with_body(""));
        }
        if request.method() != Method::POST {
            return Self::reply(
                StatusCode::METHOD_NOT_ALLOWED,
                &MessageDto::new("Method Not Allowed"),
                headers,
            );
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::error!("Image generation requested but no API key is configured");
            return self.failure("API key is not configured on the server.", headers);
        };

        tracing::debug!("Image generation requested at {}", request.url().path());

        let payload: GenerateImagesDto = match request.json() {
            Ok(payload) => payload,
            Err(e) => {
                let content_type = request
                    .headers()
                    .get(header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("none");
                tracing::warn!(
                    "Rejected generate-images request body (content type {}): {}",
                    content_type,
                    e
                );
                return Self::reply(
                    StatusCode::BAD_REQUEST,
                    &MessageDto::new("Invalid request body"),
                    headers,
                );
            }
        };

        let prompt = payload.prompt.trim();
        if prompt.is_empty() {
            return Self::reply(
                StatusCode::BAD_REQUEST,
                &MessageDto::new("Prompt is required"),
                headers,
            );
        }

        let count = clamp_image_count(payload.number_of_images);
        let generation = GenerationRequest::new(
            self.config.api_endpoint.as_str(),
            api_key,
            &self.config.provider_model,
            prompt,
        );

        tracing::info!(
            "Generating {} image(s) with model {}",
            count,
            self.config.provider_model
        );

        match self.service.generate_batch(count, &generation).await {
            Ok(images) => Self::reply(
                StatusCode::OK,
                &GenerateImagesResponseDto {
                    images: images.into_iter().map(GeneratedImage::into_dto).collect(),
                },
                headers,
            ),
            Err(e) => {
                tracing::error!("Image generation failed: {}", e);
                self.failure(&e.to_string(), headers)
            }
        }
    }
}
