//! Standard analyzer: word tokenization, lowercasing, optional stop words.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`[\p{L}\p{N}_]+`)
//! 2. LowercaseFilter
//! 3. StopFilter (when configured)
//!
//! `without_stop_words` is the canonical tokenizer of the text processor;
//! every check derives its token sequence from it.
//!
//! # Examples
//!
//! ```
//! use lancet::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello the world and test").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// A standard analyzer built from a regex tokenizer and lowercase filter.
#[derive(Clone)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with the default English stop words.
    pub fn new() -> Result<Self> {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a new standard analyzer using the given stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Create a new standard analyzer without stop word filtering.
    pub fn without_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard_no_stop");

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("Hello the world and test")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_standard_analyzer_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words().unwrap();

        let terms = analyzer.terms("Hello the World, THE end!").unwrap();
        assert_eq!(terms, vec!["hello", "the", "world", "the", "end"]);
    }

    #[test]
    fn test_tokens_are_lowercase_word_runs() {
        let analyzer = StandardAnalyzer::without_stop_words().unwrap();
        let texts = [
            "Mixed-CASE input: A_B, 3rd Place; ÉTÉ!",
            "Cafe\u{301} au lait",
            "tie\u{203F}break and under_score",
        ];

        for text in texts {
            for term in analyzer.terms(text).unwrap() {
                assert!(!term.is_empty());
                assert_eq!(term, term.to_lowercase());
                assert!(
                    term.chars().all(|c| c.is_alphanumeric() || c == '_'),
                    "token {term:?} has characters outside letters, numbers and '_'"
                );
            }
        }
    }

    #[test]
    fn test_custom_stop_filter() {
        let analyzer =
            StandardAnalyzer::with_stop_filter(StopFilter::from_words(vec!["foo"])).unwrap();

        let terms = analyzer.terms("Foo bar the FOO").unwrap();
        assert_eq!(terms, vec!["bar", "the"]);
    }
}
