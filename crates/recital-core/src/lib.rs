//! # Recital Core
//!
//! Domain types and the evaluation pipeline for recital.
//!
//! ## Modules
//!
//! - [`books`]: short-code to canonical book name table
//! - [`parser`]: `|`-delimited corpus parsing into [`Verse`] records
//! - [`prompt`]: recitation prompt construction
//! - [`evaluation`]: sequential evaluation loop driving a [`TextGenerator`]
//! - [`report`]: scoring and CSV/JSON rendering
//! - [`traits`]: the generation and observability ports
//!
//! ## Example
//!
//! ```rust,no_run
//! use recital_core::{parse_corpus, Evaluator, TracingObserver, TextGenerator, render_csv};
//! use std::time::Duration;
//!
//! async fn run(generator: &dyn TextGenerator, raw: &str) {
//!     let verses = parse_corpus(raw);
//!     let observer = TracingObserver;
//!     let evaluator = Evaluator::new(generator, &observer, Duration::from_secs(30));
//!     let results = evaluator.evaluate(&verses).await;
//!     println!("{}", render_csv(&results));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod books;
pub mod evaluation;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod traits;
pub mod types;

pub use books::{book_name, BOOKS};
pub use evaluation::{evaluate, Evaluator, DEFAULT_TIMEOUT};
pub use parser::{
    clean_verse_text, parse_corpus, BookSelection, CorpusParser, LineEnding, NumberPolicy,
    ParseOptions, DEFAULT_BOOK_CODE,
};
pub use prompt::build_prompt;
pub use report::{render_csv, render_json, score, Summary};
pub use traits::{
    EvaluationObserver, GenerationError, GenerationResult, NoopObserver, TextGenerator,
    TracingObserver,
};
pub use types::{TestResult, Verse};
