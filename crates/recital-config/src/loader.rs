//! Config file discovery and loading

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::RecitalConfig;

/// Loads [`RecitalConfig`] from disk
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file: `$XDG_CONFIG_HOME/recital/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("recital")
            .join("config.toml")
    }

    /// Load configuration with environment overrides applied
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<RecitalConfig> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load_from_file(&path)?
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    RecitalConfig::default()
                }
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a single TOML file, without environment overrides
    pub fn load_from_file(path: &Path) -> ConfigResult<RecitalConfig> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineEnding, NumberPolicy};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[backend]
base_url = "https://llm.example.com/v1"
api_key = "sk-test"
model = "gpt-4o-mini"
temperature = 0.0
max_tokens = 256
timeout_secs = 10
health_check = false

[corpus]
path = "data/kjv.txt"
books = ["Pe1", "Pe2"]
line_ending = "lf"
numbers = "strict"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();

        assert_eq!(config.backend.base_url, "https://llm.example.com/v1");
        assert_eq!(config.backend.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.backend.model, "gpt-4o-mini");
        assert_eq!(config.backend.temperature, Some(0.0));
        assert_eq!(config.backend.max_tokens, Some(256));
        assert_eq!(config.backend.timeout_secs, 10);
        assert!(!config.backend.health_check);
        assert_eq!(config.corpus.path, PathBuf::from("data/kjv.txt"));
        assert_eq!(config.corpus.books, vec!["Pe1", "Pe2"]);
        assert_eq!(config.corpus.line_ending, LineEnding::Lf);
        assert_eq!(config.corpus.numbers, NumberPolicy::Strict);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend]\nmodel = \"llama3.2\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();

        assert_eq!(config.backend.model, "llama3.2");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.corpus, RecitalConfig::default().corpus);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(
            ConfigLoader::load_from_file(&path).unwrap(),
            RecitalConfig::default()
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend\nmodel = ").unwrap();

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend]\ntimeout_secs = \"thirty\"\n").unwrap();

        assert!(matches!(
            ConfigLoader::load_from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn default_path_ends_with_recital_config() {
        let path = ConfigLoader::default_path();
        assert!(path.ends_with("recital/config.toml"));
    }
}
