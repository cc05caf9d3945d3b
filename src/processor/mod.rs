//! The text processing pipeline.
//!
//! [`TextProcessor`] runs the four checks in a fixed order:
//!
//! ```text
//! raw text ──► StopwordRemover ──► filtered text ──┬─► ProfanityDetector
//!                                                  ├─► GrammarChecker
//!                                                  └─► RepetitionCounter
//! ```
//!
//! Grammar and repetition analysis see the stopword-filtered text, not the
//! raw input. The filtered text is a space-joined token list and never ends
//! in punctuation, so a non-empty filtered text always carries the missing
//! punctuation issue.
//!
//! # Examples
//!
//! ```
//! use lancet::lexicon::Lexicon;
//! use lancet::processor::TextProcessor;
//!
//! let processor = TextProcessor::new(&Lexicon::builtin()).unwrap();
//! let result = processor.process("This is a damn good test test example").unwrap();
//!
//! assert_eq!(result.filtered_text, "damn good test test example");
//! assert_eq!(result.abusive_words, vec!["damn"]);
//! assert_eq!(result.repetitive_words, vec!["test"]);
//! assert_eq!(result.grammar_errors.len(), 2);
//! ```

pub mod grammar;
pub mod profanity;
pub mod repetition;
pub mod stopwords;

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::lexicon::Lexicon;

pub use grammar::{GrammarChecker, GrammarIssue};
pub use profanity::ProfanityDetector;
pub use repetition::RepetitionCounter;
pub use stopwords::StopwordRemover;

/// The outcome of processing one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
    /// The input with stopwords removed.
    pub filtered_text: String,
    /// Profane tokens, in order, duplicates included.
    pub abusive_words: Vec<String>,
    /// Human-readable grammar issue descriptions.
    pub grammar_errors: Vec<String>,
    /// Tokens occurring at least the threshold number of times.
    pub repetitive_words: Vec<String>,
}

/// Composes the stopword remover and the three checks.
///
/// A processor is immutable and `Send + Sync`; share one behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    remover: StopwordRemover,
    profanity: ProfanityDetector,
    grammar: GrammarChecker,
    repetition: RepetitionCounter,
}

impl TextProcessor {
    /// Build a processor over `lexicon` with the default repetition threshold.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let tokenizer: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::without_stop_words()?);

        Ok(TextProcessor {
            remover: StopwordRemover::new(Arc::clone(lexicon.stop_words()))?,
            profanity: ProfanityDetector::new(
                Arc::clone(&tokenizer),
                Arc::clone(lexicon.profanity()),
            ),
            grammar: GrammarChecker::new(Arc::clone(&tokenizer)),
            repetition: RepetitionCounter::new(tokenizer),
        })
    }

    /// Set the repetition threshold.
    pub fn with_repetition_threshold(mut self, threshold: usize) -> Self {
        self.repetition = self.repetition.with_threshold(threshold);
        self
    }

    /// Get the repetition threshold.
    pub fn repetition_threshold(&self) -> usize {
        self.repetition.threshold()
    }

    /// Run the full pipeline over `text`.
    pub fn process(&self, text: &str) -> Result<ProcessedText> {
        let filtered_text = self.remover.remove(text)?;
        let abusive_words = self.profanity.detect(&filtered_text)?;
        let grammar_errors = self
            .grammar
            .check(&filtered_text)?
            .iter()
            .map(ToString::to_string)
            .collect();
        let repetitive_words = self.repetition.repeated(&filtered_text)?;

        let result = ProcessedText {
            filtered_text,
            abusive_words,
            grammar_errors,
            repetitive_words,
        };
        debug!(
            "Processed {} bytes: {} abusive, {} grammar, {} repetitive",
            text.len(),
            result.abusive_words.len(),
            result.grammar_errors.len(),
            result.repetitive_words.len()
        );

        Ok(result)
    }
}
