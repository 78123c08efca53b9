use crate::extract;
use crate::types::{AzureVisionConfig, ConfigError, SUBSCRIPTION_KEY_HEADER, TagOptions};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::Path;

/// Detect tags in a local image file.
///
/// Issues one POST of the raw image bytes to the v3.2 Analyze operation with
/// `visualFeatures=Tags` and returns the tag names in the order the API
/// reported them.
///
/// Any failure — missing credentials, unreadable file, transport error,
/// non-200 status — collapses to an empty list; the underlying cause is
/// logged at `warn` level. Callers that need to distinguish "zero tags
/// detected" from "call failed" should use [`try_tag_image`] instead.
pub async fn tag_image(
    client: &Client,
    config: &AzureVisionConfig,
    image_path: &Path,
    options: &TagOptions,
) -> Vec<String> {
    match try_tag_image(client, config, image_path, options).await {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!(error = %e, "tagging failed, returning no tags");
            Vec::new()
        }
    }
}

/// Detect tags in a local image file, surfacing failures.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is missing credentials
/// - The image file cannot be read
/// - The endpoint is unreachable
/// - The API returns a non-200 status
/// - The response body is not valid JSON
pub async fn try_tag_image(
    client: &Client,
    config: &AzureVisionConfig,
    image_path: &Path,
    options: &TagOptions,
) -> Result<Vec<String>, TagError> {
    config.validate()?;
    let bytes = read_image(image_path)?;
    tag_image_bytes(client, config, &bytes, options).await
}

/// Tag an image from raw bytes already in memory (no file I/O).
pub async fn tag_image_bytes(
    client: &Client,
    config: &AzureVisionConfig,
    image_bytes: &[u8],
    options: &TagOptions,
) -> Result<Vec<String>, TagError> {
    config.validate()?;

    let mut query = vec![("visualFeatures", "Tags".to_string())];
    if let Some(language) = &options.language {
        query.push(("language", language.clone()));
    }

    let url = config.analyze_url();
    let resp = client
        .post(&url)
        .timeout(config.timeout)
        .query(&query)
        .header(SUBSCRIPTION_KEY_HEADER, &config.api_key)
        .header(CONTENT_TYPE, "application/octet-stream")
        .body(image_bytes.to_vec())
        .send()
        .await
        .map_err(|e| TagError::Connection(config.endpoint.clone(), e.to_string()))?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        return Err(TagError::ApiError(status.as_u16(), body));
    }

    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| TagError::InvalidResponse(e.to_string()))?;

    tracing::debug!(status = status.as_u16(), response = %json, "analyze response");

    let tags = extract::extract_tags(&json, options.min_confidence);
    tracing::debug!(?tags, "tags extracted");
    Ok(tags)
}

/// Errors that can occur during image tagging.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read image: {0}")]
    ImageRead(String),

    #[error("Cannot reach Azure endpoint {0}: {1}")]
    Connection(String, String),

    #[error("Azure returned HTTP {0}: {1}")]
    ApiError(u16, String),

    #[error("Invalid response from Azure: {0}")]
    InvalidResponse(String),
}

fn read_image(path: &Path) -> Result<Vec<u8>, TagError> {
    std::fs::read(path).map_err(|e| TagError::ImageRead(format!("{}: {}", path.display(), e)))
}
