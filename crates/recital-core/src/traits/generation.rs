//! Text generation port

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single generation call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The call did not finish before its deadline
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    /// Connection or transport failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Backend answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// Backend answered with something we could not interpret
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for generation calls
pub type GenerationResult<T> = Result<T, GenerationError>;

/// A text generation backend
///
/// One call per prompt. Implementations must not retry; the evaluation loop
/// treats any error as an empty answer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate the full completion for `prompt`, bounded by `timeout`
    async fn generate(&self, prompt: &str, timeout: Duration) -> GenerationResult<String>;

    /// Human readable backend name
    fn provider_name(&self) -> &str;

    /// Model the backend is asked to use
    fn model(&self) -> &str;
}
