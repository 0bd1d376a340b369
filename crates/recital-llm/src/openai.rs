//! OpenAI-compatible chat completion backend

use async_trait::async_trait;
use recital_config::BackendConfig;
use recital_core::{GenerationError, GenerationResult, TextGenerator};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while setting up or probing the backend
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The base URL cannot be used
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// Configured URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The backend did not answer the health probe
    #[error("backend at {url} is not reachable: {reason}")]
    Unhealthy {
        /// Probed URL
        url: String,
        /// Transport error or status
        reason: String,
    },
}

/// Static settings for [`OpenAICompatibleProvider`]
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Base URL including the version path, e.g. `http://localhost:1234/v1`
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Completion token limit
    pub max_tokens: Option<u32>,
}

impl ProviderSettings {
    /// Settings with backend defaults for sampling
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Settings from the `[backend]` config section and a resolved token
    pub fn from_config(backend: &BackendConfig, api_key: String) -> Self {
        Self {
            base_url: backend.base_url.clone(),
            api_key,
            model: backend.model.clone(),
            temperature: backend.temperature,
            max_tokens: backend.max_tokens,
        }
    }
}

/// Chat completion client for OpenAI-compatible servers
pub struct OpenAICompatibleProvider {
    client: reqwest::Client,
    settings: ProviderSettings,
    base_url: String,
}

impl OpenAICompatibleProvider {
    /// Create a provider, validating the base URL
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();

        let parsed = reqwest::Url::parse(&base_url).map_err(|e| ProviderError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProviderError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            settings,
            base_url,
        })
    }

    /// Base URL with any trailing `/` removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the backend answers `GET {base_url}/models`
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        let url = format!("{}/models", self.base_url);
        debug!(url = %url, "Probing backend");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.settings.api_key)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| ProviderError::Unhealthy {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::Unhealthy {
                url,
                reason: format!("status {}", response.status()),
            });
        }

        info!(url = %self.base_url, model = %self.settings.model, "Backend reachable");
        Ok(())
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.settings.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        if let Some(temp) = self.settings.temperature {
            body["temperature"] = serde_json::json!(temp);
        }
        if let Some(max_tokens) = self.settings.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        body
    }
}

#[async_trait]
impl TextGenerator for OpenAICompatibleProvider {
    async fn generate(&self, prompt: &str, timeout: Duration) -> GenerationResult<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&self.request_body(prompt))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout(timeout)
            } else {
                GenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse("No choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "OpenAI-compatible"
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout(timeout)
    } else {
        GenerationError::Http(e.to_string())
    }
}

// OpenAI API response types
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> ProviderSettings {
        ProviderSettings::new(base_url, "sk-test", "gpt-4o-mini")
    }

    #[test]
    fn provider_creation() {
        let provider = OpenAICompatibleProvider::new(settings("http://localhost:1234/v1/")).unwrap();

        assert_eq!(provider.provider_name(), "OpenAI-compatible");
        assert_eq!(provider.model(), "gpt-4o-mini");
        assert_eq!(provider.base_url(), "http://localhost:1234/v1");
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = OpenAICompatibleProvider::new(settings("not a url")).err().unwrap();
        assert!(matches!(err, ProviderError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = OpenAICompatibleProvider::new(settings("ftp://example.com/v1"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn request_body_includes_optional_sampling() {
        let mut s = settings("http://localhost:1234/v1");
        let provider = OpenAICompatibleProvider::new(s.clone()).unwrap();
        let body = provider.request_body("Recite");

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Recite");
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());

        s.temperature = Some(0.0);
        s.max_tokens = Some(200);
        let provider = OpenAICompatibleProvider::new(s).unwrap();
        let body = provider.request_body("Recite");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["max_tokens"], 200);
    }

    #[test]
    fn settings_from_config() {
        let backend = BackendConfig {
            temperature: Some(0.2),
            max_tokens: Some(128),
            ..BackendConfig::default()
        };
        let s = ProviderSettings::from_config(&backend, "token".to_string());

        assert_eq!(s.base_url, backend.base_url);
        assert_eq!(s.api_key, "token");
        assert_eq!(s.model, backend.model);
        assert_eq!(s.temperature, Some(0.2));
        assert_eq!(s.max_tokens, Some(128));
    }
}
