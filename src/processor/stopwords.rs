//! Stopword removal.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::token_filter::StopFilter;
use crate::error::Result;

/// Removes stopwords from text and rejoins the remaining tokens with single
/// spaces, in their original order.
///
/// ```
/// use lancet::processor::StopwordRemover;
///
/// let remover = StopwordRemover::english().unwrap();
/// assert_eq!(remover.remove("This is a test, isn't it?").unwrap(), "test");
/// ```
#[derive(Debug, Clone)]
pub struct StopwordRemover {
    analyzer: StandardAnalyzer,
}

impl StopwordRemover {
    /// Create a remover over a shared stopword set.
    pub fn new(stop_words: Arc<HashSet<String>>) -> Result<Self> {
        let analyzer =
            StandardAnalyzer::with_stop_filter(StopFilter::with_shared_stop_words(stop_words))?;
        Ok(StopwordRemover { analyzer })
    }

    /// Create a remover with the built-in English stopwords.
    pub fn english() -> Result<Self> {
        Ok(StopwordRemover {
            analyzer: StandardAnalyzer::new()?,
        })
    }

    /// Tokenize `text`, drop stopwords, and join what is left.
    ///
    /// Returns an empty string when every token is a stopword.
    pub fn remove(&self, text: &str) -> Result<String> {
        Ok(self.analyzer.terms(text)?.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_stopwords() {
        let remover = StopwordRemover::english().unwrap();
        let filtered = remover
            .remove("This is a damn good test test example")
            .unwrap();
        assert_eq!(filtered, "damn good test test example");
    }

    #[test]
    fn test_all_stopwords() {
        let remover = StopwordRemover::english().unwrap();
        assert_eq!(remover.remove("It is what it is.").unwrap(), "");
        assert_eq!(remover.remove("").unwrap(), "");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        let remover = StopwordRemover::english().unwrap();
        assert_eq!(
            remover.remove("Hello,   World!  Goodbye...").unwrap(),
            "hello world goodbye"
        );
    }

    #[test]
    fn test_idempotent_on_filtered_text() {
        let remover = StopwordRemover::english().unwrap();
        let once = remover
            .remove("The cat sat on the mat, and then it slept.")
            .unwrap();
        let twice = remover.remove(&once).unwrap();
        assert_eq!(once, "cat sat mat slept");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_set() {
        let words = Arc::new(HashSet::from(["good".to_string()]));
        let remover = StopwordRemover::new(words).unwrap();
        assert_eq!(remover.remove("a good day").unwrap(), "a day");
    }
}
