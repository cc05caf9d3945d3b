//! # Lancet
//!
//! A small text processing service. Given a piece of text it
//!
//! - removes English stopwords,
//! - flags profane words,
//! - reports simple grammar issues,
//! - lists words that occur repeatedly.
//!
//! The checks are built on a tokenizer/filter/analyzer pipeline
//! ([`analysis`]) and composed by [`processor::TextProcessor`]. The
//! [`server`] module exposes the processor as `POST /process_text`.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod processor;
pub mod server;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
