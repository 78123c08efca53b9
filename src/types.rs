use std::time::Duration;

/// Header carrying the Cognitive Services subscription key.
pub(crate) const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Environment variable holding the subscription key.
pub const ENV_API_KEY: &str = "AZURE_CV_KEY";
/// Environment variable holding the endpoint base URL.
pub const ENV_ENDPOINT: &str = "AZURE_CV_ENDPOINT";

/// Configuration for the Azure Computer Vision client.
#[derive(Debug, Clone)]
pub struct AzureVisionConfig {
    /// Endpoint base URL (e.g., "https://myresource.cognitiveservices.azure.com/").
    ///
    /// API paths are appended directly, so a trailing slash is expected.
    pub endpoint: String,
    /// Cognitive Services subscription key.
    pub api_key: String,
    /// Request timeout (default: 30s)
    pub timeout: Duration,
}

impl Default for AzureVisionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl AzureVisionConfig {
    /// Create a new config with the given endpoint and subscription key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from the `AZURE_CV_ENDPOINT` and `AZURE_CV_KEY`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var(ENV_ENDPOINT).unwrap_or_default();
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        let config = Self::new(endpoint, api_key);
        config.validate()?;
        Ok(config)
    }

    /// Set the endpoint base URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the subscription key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that both credentials are present.
    ///
    /// Called by every operation before any file or network I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(())
    }

    /// Full URL of the v3.2 Analyze operation.
    pub fn analyze_url(&self) -> String {
        format!("{}vision/v3.2/analyze", self.endpoint)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Azure API credentials are missing. Set {ENV_API_KEY} and {ENV_ENDPOINT}.")]
    MissingCredentials,
}

/// Caption configuration for controlling description requests.
#[derive(Debug, Clone)]
pub struct CaptionOptions {
    /// Language for the generated caption (default: "en")
    pub language: String,
    /// Number of candidate captions to request (default: 1)
    pub max_candidates: u8,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_candidates: 1,
        }
    }
}

/// Tag configuration for controlling tag extraction behavior.
#[derive(Debug, Clone, Default)]
pub struct TagOptions {
    /// Language for tag names (default: None, uses the API default)
    pub language: Option<String>,
    /// Drop tags scored below this confidence (default: None, keep all)
    pub min_confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_credentials() {
        assert!(AzureVisionConfig::default().validate().is_err());
        assert!(AzureVisionConfig::new("https://x.example.com/", "")
            .validate()
            .is_err());
        assert!(AzureVisionConfig::new("", "key").validate().is_err());
    }

    #[test]
    fn validate_accepts_full_credentials() {
        let config = AzureVisionConfig::new("https://x.example.com/", "key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn analyze_url_appends_api_path() {
        let config = AzureVisionConfig::new("https://x.example.com/", "key");
        assert_eq!(
            config.analyze_url(),
            "https://x.example.com/vision/v3.2/analyze"
        );
    }

    // Single test for all from_env cases: env vars are process-global and
    // tests run in parallel, so the set/remove sequence must stay serial.
    #[test]
    fn from_env_requires_both_variables() {
        std::env::remove_var(ENV_ENDPOINT);
        std::env::remove_var(ENV_API_KEY);
        assert!(matches!(
            AzureVisionConfig::from_env(),
            Err(ConfigError::MissingCredentials)
        ));

        std::env::set_var(ENV_ENDPOINT, "https://x.example.com/");
        std::env::set_var(ENV_API_KEY, "");
        assert!(matches!(
            AzureVisionConfig::from_env(),
            Err(ConfigError::MissingCredentials)
        ));

        std::env::set_var(ENV_API_KEY, "key");
        let config = AzureVisionConfig::from_env().unwrap();
        assert_eq!(config.endpoint, "https://x.example.com/");
        assert_eq!(config.api_key, "key");

        std::env::remove_var(ENV_ENDPOINT);
        std::env::remove_var(ENV_API_KEY);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = AzureVisionConfig::default()
            .endpoint("https://x.example.com/")
            .api_key("key")
            .timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }
}
