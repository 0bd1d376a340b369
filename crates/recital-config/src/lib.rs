//! # Recital Configuration
//!
//! Typed configuration for recital runs: which backend to query and which
//! part of the corpus to evaluate.
//!
//! Values are layered with precedence defaults < config file < environment.
//! Command line overrides are applied on top by the binary.
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:1234/v1"
//! api_key = "lm-studio"
//! model = "local-model"
//! timeout_secs = 30
//!
//! [corpus]
//! path = "kjvdat.txt"
//! books = ["Pe2"]
//! line_ending = "crlf"
//! numbers = "lenient"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod components;
mod credentials;
mod error;
mod loader;

pub use components::*;
pub use credentials::{resolve_api_key, API_KEY_ENV_VARS, DEFAULT_API_KEY};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
