//! Configuration for the Lancet service.
//!
//! Configuration is read from an optional TOML file. Every section and field
//! has a default, so an empty file (or no file at all) yields a working
//! service on `0.0.0.0:8080` with the built-in word lists.
//!
//! ```
//! use lancet::config::LancetConfig;
//!
//! let config = LancetConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
//! assert_eq!(config.server.port, 9000);
//! assert_eq!(config.analysis.repetition_threshold, 2);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LancetError, Result};
use crate::lexicon::StopwordSource;

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Default minimum count for a word to be reported as repetitive.
pub const DEFAULT_REPETITION_THRESHOLD: usize = 2;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LancetConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Text analysis settings.
    pub analysis: AnalysisConfig,
    /// Stopword set settings.
    pub stopwords: StopwordConfig,
    /// Profanity dictionary settings.
    pub profanity: ProfanityConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// The `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Text analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum occurrence count for a repetitive word.
    pub repetition_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            repetition_threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }
}

/// Kind of stopword source, as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordSourceKind {
    #[default]
    Builtin,
    File,
    Remote,
}

/// Stopword set settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordConfig {
    /// Language of the stopword set.
    pub language: String,
    /// Where the set is read from.
    pub source: StopwordSourceKind,
    /// Word list path for `source = "file"`.
    pub path: Option<PathBuf>,
    /// Download URL for `source = "remote"`.
    pub url: Option<String>,
    /// Local cache file for `source = "remote"`.
    pub cache_path: Option<PathBuf>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            source: StopwordSourceKind::Builtin,
            path: None,
            url: None,
            cache_path: None,
        }
    }
}

impl StopwordConfig {
    /// Resolve the configured source, checking that its fields are present.
    pub fn source(&self) -> Result<StopwordSource> {
        match self.source {
            StopwordSourceKind::Builtin => Ok(StopwordSource::Builtin),
            StopwordSourceKind::File => self
                .path
                .clone()
                .map(StopwordSource::File)
                .ok_or_else(|| {
                    LancetError::config("stopwords.path is required for source \"file\"")
                }),
            StopwordSourceKind::Remote => match (&self.url, &self.cache_path) {
                (Some(url), Some(cache_path)) => Ok(StopwordSource::Remote {
                    url: url.clone(),
                    cache_path: cache_path.clone(),
                }),
                (None, _) => Err(LancetError::config(
                    "stopwords.url is required for source \"remote\"",
                )),
                (_, None) => Err(LancetError::config(
                    "stopwords.cache_path is required for source \"remote\"",
                )),
            },
        }
    }
}

/// Profanity dictionary settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfanityConfig {
    /// Replace the built-in list with this file (one word per line).
    pub words_file: Option<PathBuf>,
    /// Words added to the dictionary.
    pub extra_words: Vec<String>,
    /// Words never reported.
    pub allowed_words: Vec<String>,
    /// Match look-alike spellings such as `sh1t`.
    pub leetspeak: bool,
}

impl Default for ProfanityConfig {
    fn default() -> Self {
        Self {
            words_file: None,
            extra_words: Vec::new(),
            allowed_words: Vec::new(),
            leetspeak: true,
        }
    }
}

impl LancetConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LancetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LancetError::config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check settings that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(LancetError::config("server.port must be non-zero"));
        }
        if self.stopwords.language.trim().is_empty() {
            return Err(LancetError::config("stopwords.language must not be empty"));
        }
        self.stopwords.source()?;
        Ok(())
    }
}
