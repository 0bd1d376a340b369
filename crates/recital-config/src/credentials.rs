//! API key resolution
//!
//! [`resolve_api_key`] checks sources in this order:
//! 1. Environment variables in [`API_KEY_ENV_VARS`] order
//! 2. `backend.api_key` from the config file
//! 3. [`DEFAULT_API_KEY`], accepted by local OpenAI-compatible servers

use tracing::debug;

use crate::BackendConfig;

/// Environment variables consulted for the bearer token
pub const API_KEY_ENV_VARS: &[&str] = &["RECITAL_API_KEY", "OPENAI_API_KEY"];

/// Token used when nothing else is configured
pub const DEFAULT_API_KEY: &str = "lm-studio";

/// Resolve the bearer token for the backend
pub fn resolve_api_key<F>(backend: &BackendConfig, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    for var in API_KEY_ENV_VARS {
        if let Some(key) = lookup(var).filter(|k| !k.is_empty()) {
            debug!(source = var, "Using API key from environment");
            return key;
        }
    }

    if let Some(key) = backend.api_key.as_ref().filter(|k| !k.is_empty()) {
        debug!("Using API key from config file");
        return key.clone();
    }

    debug!("No API key configured, using default token");
    DEFAULT_API_KEY.to_string()
}
