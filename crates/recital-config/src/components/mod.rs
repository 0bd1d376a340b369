//! Configuration sections

mod backend;
mod corpus;

pub use backend::BackendConfig;
pub use corpus::{CorpusConfig, LineEnding, NumberPolicy};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecitalConfig {
    /// Model backend
    pub backend: BackendConfig,
    /// Corpus selection
    pub corpus: CorpusConfig,
}

impl RecitalConfig {
    /// Apply `RECITAL_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply `RECITAL_*` overrides from an arbitrary lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("RECITAL_BASE_URL") {
            self.backend.base_url = url;
        }
        if let Some(model) = lookup("RECITAL_MODEL") {
            self.backend.model = model;
        }
        if let Some(timeout) = lookup("RECITAL_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => self.backend.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric RECITAL_TIMEOUT"),
            }
        }
        if let Some(path) = lookup("RECITAL_CORPUS") {
            self.corpus.path = path.into();
        }
    }

    /// Check that the configuration can drive a run
    pub fn validate(&self) -> ConfigResult<()> {
        self.backend.validate()?;
        self.corpus.validate()?;
        Ok(())
    }
}

pub(crate) fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_reference_run() {
        let config = RecitalConfig::default();

        assert_eq!(config.backend.base_url, "http://localhost:1234/v1");
        assert_eq!(config.backend.timeout_secs, 30);
        assert!(config.backend.health_check);
        assert_eq!(config.corpus.path, PathBuf::from("./kjvdat.txt"));
        assert_eq!(config.corpus.books, vec!["Pe2".to_string()]);
        assert!(!config.corpus.all_books);
        assert_eq!(config.corpus.line_ending, LineEnding::Crlf);
        assert_eq!(config.corpus.numbers, NumberPolicy::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_replace_values() {
        let mut config = RecitalConfig::default();
        config.apply_overrides_from(env(&[
            ("RECITAL_BASE_URL", "https://llm.example.com/v1"),
            ("RECITAL_MODEL", "qwen2.5-7b"),
            ("RECITAL_TIMEOUT", "90"),
            ("RECITAL_CORPUS", "/data/kjv.txt"),
        ]));

        assert_eq!(config.backend.base_url, "https://llm.example.com/v1");
        assert_eq!(config.backend.model, "qwen2.5-7b");
        assert_eq!(config.backend.timeout_secs, 90);
        assert_eq!(config.corpus.path, PathBuf::from("/data/kjv.txt"));
    }

    #[test]
    fn bad_timeout_override_is_ignored() {
        let mut config = RecitalConfig::default();
        config.apply_overrides_from(env(&[("RECITAL_TIMEOUT", "soon")]));
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn empty_lookup_changes_nothing() {
        let mut config = RecitalConfig::default();
        config.apply_overrides_from(env(&[]));
        assert_eq!(config, RecitalConfig::default());
    }
}
