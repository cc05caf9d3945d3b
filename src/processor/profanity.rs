//! Profanity detection.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::lexicon::ProfanityDictionary;

/// Reports the tokens of a text that the profanity dictionary flags,
/// in order of appearance and with duplicates.
#[derive(Clone)]
pub struct ProfanityDetector {
    analyzer: Arc<dyn Analyzer>,
    dictionary: Arc<ProfanityDictionary>,
}

impl ProfanityDetector {
    /// Create a detector from a tokenizing analyzer and a shared dictionary.
    pub fn new(analyzer: Arc<dyn Analyzer>, dictionary: Arc<ProfanityDictionary>) -> Self {
        ProfanityDetector {
            analyzer,
            dictionary,
        }
    }

    /// Return every profane token of `text`.
    pub fn detect(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyzer
            .analyze(text)?
            .filter(|token| self.dictionary.contains(&token.text))
            .map(|token| token.text)
            .collect())
    }
}

impl std::fmt::Debug for ProfanityDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfanityDetector")
            .field("analyzer", &self.analyzer.name())
            .field("dictionary_size", &self.dictionary.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    fn detector(words: &[&str]) -> ProfanityDetector {
        ProfanityDetector::new(
            Arc::new(StandardAnalyzer::without_stop_words().unwrap()),
            Arc::new(ProfanityDictionary::from_words(words.iter().copied())),
        )
    }

    #[test]
    fn test_detect_in_order_with_duplicates() {
        let detector = detector(&["damn", "crap"]);
        let found = detector.detect("Damn, this crap is damn good").unwrap();
        assert_eq!(found, vec!["damn", "crap", "damn"]);
    }

    #[test]
    fn test_clean_text() {
        let detector = detector(&["damn"]);
        assert!(detector.detect("a perfectly polite sentence").unwrap().is_empty());
        assert!(detector.detect("").unwrap().is_empty());
    }

    #[test]
    fn test_whole_tokens_only() {
        let detector = detector(&["ass"]);
        assert!(detector.detect("classic assessment").unwrap().is_empty());
        assert_eq!(detector.detect("kick ass").unwrap(), vec!["ass"]);
    }

    #[test]
    fn test_reports_leetspeak_as_written() {
        let detector = detector(&["shit"]);
        assert_eq!(detector.detect("oh SH1T").unwrap(), vec!["sh1t"]);
    }
}
