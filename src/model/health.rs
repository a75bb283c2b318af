use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
    pub environment: EnvironmentDto,
    pub api: ApiHealthDto,
    pub database: DatabaseHealthDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDto {
    pub version: String,
    pub platform: String,
    pub arch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealthDto {
    pub image_api_key_present: bool,
    pub image_endpoint: String,
    pub provider_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealthDto {
    /// `"configured"` when `DATABASE_URL` was set explicitly, `"missing"` otherwise.
    pub database_url: String,
    pub connected: bool,
}
