//! Evaluation loop
//!
//! Sends one prompt per verse, strictly in order and one at a time. A failed
//! or timed out call is recorded as an empty answer; the loop never stops
//! early.

use std::time::Duration;

use crate::prompt::build_prompt;
use crate::report::Summary;
use crate::traits::{EvaluationObserver, GenerationError, GenerationResult, TextGenerator};
use crate::types::{TestResult, Verse};

/// Per-call deadline used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives a corpus through a [`TextGenerator`]
pub struct Evaluator<'g> {
    generator: &'g dyn TextGenerator,
    observer: &'g dyn EvaluationObserver,
    timeout: Duration,
}

impl<'g> Evaluator<'g> {
    /// Create an evaluator with a fixed per-call deadline
    pub fn new(
        generator: &'g dyn TextGenerator,
        observer: &'g dyn EvaluationObserver,
        timeout: Duration,
    ) -> Self {
        Self {
            generator,
            observer,
            timeout,
        }
    }

    /// Per-call deadline
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Evaluate every verse in order
    pub async fn evaluate<'v>(&self, verses: &'v [Verse]) -> Vec<TestResult<'v>> {
        let mut results = Vec::with_capacity(verses.len());

        for (index, verse) in verses.iter().enumerate() {
            self.observer.verse_started(index, verses.len(), verse);

            let actual = match self.recite(verse).await {
                Ok(text) => text,
                Err(e) => {
                    self.observer.generation_failed(verse, &e);
                    String::new()
                }
            };

            let result = TestResult::new(verse, actual);
            self.observer.verse_evaluated(&result);
            results.push(result);
        }

        self.observer.run_finished(&Summary::from_results(&results));
        results
    }

    async fn recite(&self, verse: &Verse) -> GenerationResult<String> {
        let prompt = build_prompt(verse);
        tokio::time::timeout(self.timeout, self.generator.generate(&prompt, self.timeout))
            .await
            .unwrap_or(Err(GenerationError::Timeout(self.timeout)))
    }
}

/// Shorthand for [`Evaluator::evaluate`]
pub async fn evaluate<'v>(
    verses: &'v [Verse],
    generator: &dyn TextGenerator,
    observer: &dyn EvaluationObserver,
    timeout: Duration,
) -> Vec<TestResult<'v>> {
    Evaluator::new(generator, observer, timeout)
        .evaluate(verses)
        .await
}
