//! Observability port for evaluation runs

use tracing::{debug, error, info};

use crate::report::Summary;
use crate::traits::GenerationError;
use crate::types::{TestResult, Verse};

/// Receives evaluation events as they happen
///
/// Passed explicitly to the [`Evaluator`](crate::Evaluator). Events are a
/// side channel; nothing here affects the results.
pub trait EvaluationObserver: Send + Sync {
    /// A verse is about to be sent to the model
    fn verse_started(&self, _index: usize, _total: usize, _verse: &Verse) {}

    /// The model call for a verse failed; the verse is scored as wrong
    fn generation_failed(&self, _verse: &Verse, _error: &GenerationError) {}

    /// A verse has been scored
    fn verse_evaluated(&self, result: &TestResult<'_>);

    /// Every verse has been processed
    fn run_finished(&self, _summary: &Summary) {}
}

/// Emits evaluation events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl EvaluationObserver for TracingObserver {
    fn verse_started(&self, index: usize, total: usize, verse: &Verse) {
        debug!(index = index + 1, total, "{}", verse);
    }

    fn generation_failed(&self, verse: &Verse, error: &GenerationError) {
        error!(
            book = %verse.book,
            chapter = verse.chapter,
            verse = verse.verse,
            error = %error,
            "LLM call failed"
        );
    }

    fn verse_evaluated(&self, result: &TestResult<'_>) {
        let verse = result.verse;
        info!(
            book = %verse.book,
            chapter = verse.chapter,
            verse = verse.verse,
            expected = %verse.line,
            actual = %result.actual,
            matched = result.matches(),
            "RESULT"
        );
    }

    fn run_finished(&self, summary: &Summary) {
        info!(
            total = summary.total,
            matched = summary.matched,
            accuracy = ?summary.accuracy,
            "Test finished"
        );
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {
    fn verse_evaluated(&self, _result: &TestResult<'_>) {}
}
