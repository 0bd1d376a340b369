//! Ports between the evaluation pipeline and the outside world
//!
//! - [`TextGenerator`]: the model backend, implemented by `recital-llm`
//! - [`EvaluationObserver`]: the observability side channel

pub mod generation;
pub mod observer;

pub use generation::{GenerationError, GenerationResult, TextGenerator};
pub use observer::{EvaluationObserver, NoopObserver, TracingObserver};
