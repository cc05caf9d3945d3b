//! Error types for the Lancet library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LancetError`] enum.
//!
//! # Examples
//!
//! ```
//! use lancet::error::{LancetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LancetError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lancet operations.
///
/// Variants group errors by the layer they come from. Constructor helpers
/// such as [`LancetError::analysis`] accept anything convertible into a
/// `String`.
#[derive(Error, Debug)]
pub enum LancetError {
    /// I/O errors (word lists, cache files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon errors (stopword sets, profanity dictionaries)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP client errors while fetching remote word lists
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LancetError.
pub type Result<T> = std::result::Result<T, LancetError>;

impl LancetError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LancetError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LancetError::Lexicon(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LancetError::Config(msg.into())
    }

    /// Create a new server error.
    pub fn server<S: Into<String>>(msg: S) -> Self {
        LancetError::Server(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LancetError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LancetError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
