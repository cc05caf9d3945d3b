//! Text analysis module for Lancet.
//!
//! This module provides tokenization, token filters and the analyzers that
//! chain them. Every check in [`crate::processor`] derives its token
//! sequence from these analyzers.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
