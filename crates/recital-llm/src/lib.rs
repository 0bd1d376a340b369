//! # Recital LLM
//!
//! Text generation backends for recital.
//!
//! [`OpenAICompatibleProvider`] talks to any server exposing the OpenAI
//! `/chat/completions` API (OpenAI, LM Studio, Ollama's `/v1`, vLLM, ...).
//!
//! ## Example
//!
//! ```rust,no_run
//! use recital_core::TextGenerator;
//! use recital_llm::{OpenAICompatibleProvider, ProviderSettings};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = OpenAICompatibleProvider::new(ProviderSettings::new(
//!         "http://localhost:1234/v1",
//!         "lm-studio",
//!         "local-model",
//!     ))?;
//!     provider.health_check().await?;
//!
//!     let text = provider
//!         .generate("Recite John 11:35", Duration::from_secs(30))
//!         .await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod openai;

pub use openai::{OpenAICompatibleProvider, ProviderError, ProviderSettings};
