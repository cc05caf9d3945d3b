//! Repeated word counting.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::config::DEFAULT_REPETITION_THRESHOLD;
use crate::error::Result;

/// Finds the distinct tokens of a text that occur at least `threshold` times.
///
/// Results come back in order of first appearance. Callers should still
/// treat them as a set.
#[derive(Clone)]
pub struct RepetitionCounter {
    analyzer: Arc<dyn Analyzer>,
    threshold: usize,
}

impl RepetitionCounter {
    /// Create a counter with the default threshold of 2.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        RepetitionCounter {
            analyzer,
            threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }

    /// Set the minimum occurrence count. 0 and 1 both accept every token.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Get the configured threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Return the tokens of `text` whose count meets the threshold.
    pub fn repeated(&self, text: &str) -> Result<Vec<String>> {
        let terms = self.analyzer.terms(text)?;

        let mut counts: AHashMap<&str, usize> = AHashMap::with_capacity(terms.len());
        let mut first_seen: Vec<&str> = Vec::new();
        for term in &terms {
            let count = counts.entry(term.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(term.as_str());
            }
            *count += 1;
        }

        Ok(first_seen
            .into_iter()
            .filter(|term| counts.get(term).copied().unwrap_or(0) >= self.threshold)
            .map(str::to_string)
            .collect())
    }
}

impl std::fmt::Debug for RepetitionCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepetitionCounter")
            .field("analyzer", &self.analyzer.name())
            .field("threshold", &self.threshold)
            .finish()
    }
}
