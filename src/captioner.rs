use crate::extract;
use crate::types::{AzureVisionConfig, CaptionOptions, ConfigError, SUBSCRIPTION_KEY_HEADER};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::Path;

/// Returned when the response carries no usable caption.
pub const NO_CAPTION: &str = "No caption generated";

/// Generate a natural-language caption for a local image file.
///
/// Issues one POST of the raw image bytes to the v3.2 Analyze operation with
/// `visualFeatures=Description` and returns the top caption text.
///
/// The returned string follows the Analyze contract:
/// - the caption text, when the API produced one
/// - `"No caption generated"`, when the response has no caption
/// - `"Error: {status}, {body}"`, when the API answered with a non-200 status
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is missing credentials
/// - The image file cannot be read
/// - The endpoint is unreachable
/// - The response body is not valid JSON
pub async fn describe_image(
    client: &Client,
    config: &AzureVisionConfig,
    image_path: &Path,
    options: &CaptionOptions,
) -> Result<String, CaptionError> {
    config.validate()?;
    let bytes = read_image(image_path)?;
    describe_image_bytes(client, config, &bytes, options).await
}

/// Caption an image from raw bytes already in memory (no file I/O).
pub async fn describe_image_bytes(
    client: &Client,
    config: &AzureVisionConfig,
    image_bytes: &[u8],
    options: &CaptionOptions,
) -> Result<String, CaptionError> {
    config.validate()?;

    let url = config.analyze_url();
    let resp = client
        .post(&url)
        .timeout(config.timeout)
        .query(&[
            ("visualFeatures", "Description"),
            ("language", options.language.as_str()),
            ("maxCandidates", &options.max_candidates.to_string()),
        ])
        .header(SUBSCRIPTION_KEY_HEADER, &config.api_key)
        .header(CONTENT_TYPE, "application/octet-stream")
        .body(image_bytes.to_vec())
        .send()
        .await
        .map_err(|e| CaptionError::Connection(config.endpoint.clone(), e.to_string()))?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "analyze request failed");
        return Ok(format!("Error: {}, {}", status.as_u16(), body));
    }

    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| CaptionError::InvalidResponse(e.to_string()))?;

    let caption = extract::extract_caption(&json).unwrap_or_else(|| NO_CAPTION.to_string());
    tracing::debug!(%caption, "caption extracted");
    Ok(caption)
}

/// Errors that can occur during image captioning.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read image: {0}")]
    ImageRead(String),

    #[error("Cannot reach Azure endpoint {0}: {1}")]
    Connection(String, String),

    #[error("Invalid response from Azure: {0}")]
    InvalidResponse(String),
}

fn read_image(path: &Path) -> Result<Vec<u8>, CaptionError> {
    std::fs::read(path).map_err(|e| CaptionError::ImageRead(format!("{}: {}", path.display(), e)))
}
