//! Model backend configuration

use serde::{Deserialize, Serialize};

use super::invalid;
use crate::error::ConfigResult;

/// OpenAI-compatible text generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL, including the API version path (e.g. `http://localhost:1234/v1`)
    pub base_url: String,
    /// Bearer token; see [`resolve_api_key`](crate::resolve_api_key) for fallbacks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model name sent with every request
    pub model: String,
    /// Sampling temperature (0.0-2.0), backend default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate, backend default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Per-call deadline in seconds
    pub timeout_secs: u64,
    /// Probe the backend before evaluating
    pub health_check: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1234/v1".to_string(),
            api_key: None,
            model: "local-model".to_string(),
            temperature: None,
            max_tokens: None,
            timeout_secs: 30,
            health_check: true,
        }
    }
}

impl BackendConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(invalid("backend.base_url is empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid(format!(
                "backend.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("backend.model is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("backend.timeout_secs must be greater than zero"));
        }
        if let Some(temp) = self.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(invalid(format!(
                    "backend.temperature must be between 0.0 and 2.0, got {}",
                    temp
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_or_non_http_url() {
        let mut config = BackendConfig {
            base_url: "  ".to_string(),
            ..BackendConfig::default()
        };
        assert!(config.validate().is_err());

        config.base_url = "localhost:1234".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://api.openai.com/v1".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..BackendConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = BackendConfig {
            temperature: Some(3.5),
            ..BackendConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
