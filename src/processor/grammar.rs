//! Basic grammar checks.
//!
//! Exactly two rules are checked, independently of each other:
//!
//! 1. the trimmed text must end with `.`, `!` or `?`;
//! 2. no token may be immediately followed by the same token.
//!
//! An empty (or whitespace-only) text has no last character, so the
//! punctuation rule does not apply to it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// Characters accepted as sentence terminators.
pub const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

/// A grammar problem found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrammarIssue {
    /// The text does not end with a terminator.
    MissingTerminalPunctuation,
    /// A word appears twice in a row.
    RepeatedWord { word: String },
}

impl fmt::Display for GrammarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarIssue::MissingTerminalPunctuation => write!(
                f,
                "The sentence does not end with proper punctuation (e.g., '.', '!', '?')."
            ),
            GrammarIssue::RepeatedWord { word } => write!(
                f,
                "Word repetition detected: '{word}' is repeated consecutively."
            ),
        }
    }
}

/// Checks text for missing terminal punctuation and repeated words.
#[derive(Clone)]
pub struct GrammarChecker {
    analyzer: Arc<dyn Analyzer>,
}

impl GrammarChecker {
    /// Create a checker that tokenizes with `analyzer`.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        GrammarChecker { analyzer }
    }

    /// Run both rules over `text`.
    ///
    /// The punctuation issue, if any, comes first; repetition issues follow in
    /// token order, one per adjacent equal pair.
    pub fn check(&self, text: &str) -> Result<Vec<GrammarIssue>> {
        let mut issues = Vec::new();

        if let Some(last) = text.trim().chars().last()
            && !TERMINAL_PUNCTUATION.contains(&last)
        {
            issues.push(GrammarIssue::MissingTerminalPunctuation);
        }

        let terms = self.analyzer.terms(text)?;
        issues.extend(
            terms
                .windows(2)
                .filter(|pair| pair[0] == pair[1])
                .map(|pair| GrammarIssue::RepeatedWord {
                    word: pair[0].clone(),
                }),
        );

        Ok(issues)
    }
}

impl fmt::Debug for GrammarChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarChecker")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
