//! Common configuration structures for LLM providers.

use crate::error::{LlmError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Groq's OpenAI-compatible endpoint.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default Groq model.
pub const GROQ_DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Configuration for remote LLM providers.
#[derive(Clone, Serialize, Deserialize)]
pub struct RemoteLlmConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Base URL for the API, without a trailing slash.
    ///
    /// Example: "https://api.groq.com/openai/v1"
    pub base_url: String,

    /// Model name/identifier.
    pub model: String,

    /// Request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl RemoteLlmConfig {
    /// Create a new remote LLM configuration.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout: default_timeout(),
        }
    }

    /// Create configuration from environment variable.
    pub fn from_env(
        env_var: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let api_key = std::env::var(env_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                LlmError::ApiKeyNotFound(format!("Environment variable: {}", env_var))
            })?;

        Ok(Self::new(api_key, base_url, model))
    }

    /// Groq defaults with the key taken from `GROQ_API_KEY`.
    pub fn groq_from_env() -> Result<Self> {
        Self::from_env(GROQ_API_KEY_ENV, GROQ_BASE_URL, GROQ_DEFAULT_MODEL)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for RemoteLlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteLlmConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_config_builder() {
        let config = RemoteLlmConfig::new("test-key", "https://api.groq.com/openai/v1/", "llama")
            .with_timeout(Duration::from_secs(120));

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_default_timeout() {
        let config = RemoteLlmConfig::new("k", GROQ_BASE_URL, GROQ_DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_from_env_missing_key() {
        let err = RemoteLlmConfig::from_env(
            "JOKEBOT_TEST_KEY_THAT_IS_NEVER_SET",
            GROQ_BASE_URL,
            GROQ_DEFAULT_MODEL,
        )
        .unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("JOKEBOT_TEST_KEY_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = RemoteLlmConfig::new("gsk_secret", GROQ_BASE_URL, GROQ_DEFAULT_MODEL);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains(GROQ_DEFAULT_MODEL));
    }
}
