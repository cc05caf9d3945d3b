//! Stopword set loading.
//!
//! A stopword set comes from one of three [`StopwordSource`]s. Remote sets
//! are downloaded once and persisted to a cache file; later starts read the
//! cache and never touch the network.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
use crate::error::{LancetError, Result};
use crate::lexicon::parse_word_list;

/// Where a stopword set is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    /// The built-in list for the configured language.
    Builtin,
    /// A local file with one word per line.
    File(PathBuf),
    /// A remote word list, cached locally after the first download.
    Remote { url: String, cache_path: PathBuf },
}

/// Languages with a built-in stopword list.
pub const BUILTIN_LANGUAGES: &[&str] = &["english", "en"];

/// Get the built-in stopword set for a language.
pub fn builtin_stopwords(language: &str) -> Result<HashSet<String>> {
    match language.to_lowercase().as_str() {
        "english" | "en" => Ok(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()),
        other => Err(LancetError::lexicon(format!(
            "No built-in stopword list for language '{other}' (available: {})",
            BUILTIN_LANGUAGES.join(", ")
        ))),
    }
}

/// Load the stopword set for `language` from `source`.
pub async fn load_stopwords(language: &str, source: &StopwordSource) -> Result<HashSet<String>> {
    let stop_words = match source {
        StopwordSource::Builtin => builtin_stopwords(language)?,
        StopwordSource::File(path) => {
            debug!("Reading {language} stopwords from {}", path.display());
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                LancetError::lexicon(format!(
                    "Failed to read stopword file {}: {e}",
                    path.display()
                ))
            })?;
            parse_word_list(&content).collect()
        }
        StopwordSource::Remote { url, cache_path } => {
            let content = fetch_cached(url, cache_path).await?;
            let words: HashSet<String> = parse_word_list(&content).collect();
            if words.is_empty() {
                return Err(LancetError::lexicon(format!(
                    "Remote stopword list {url} (cache {}) contains no words",
                    cache_path.display()
                )));
            }
            words
        }
    };

    if stop_words.is_empty() {
        warn!("Stopword set for '{language}' is empty; no words will be filtered");
    }

    Ok(stop_words)
}

/// Return the cached word list at `cache_path`, downloading it from `url`
/// first if the cache does not exist yet.
///
/// The body is written to a sibling temporary file and renamed into place,
/// so an interrupted download never leaves a partial cache behind. An empty
/// body is rejected and not cached.
async fn fetch_cached(url: &str, cache_path: &Path) -> Result<String> {
    if tokio::fs::try_exists(cache_path).await? {
        debug!("Using cached stopword list {}", cache_path.display());
        return Ok(tokio::fs::read_to_string(cache_path).await?);
    }

    info!("Downloading stopword list from {url}");
    let body = reqwest::get(url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    if parse_word_list(&body).next().is_none() {
        return Err(LancetError::lexicon(format!(
            "Stopword list downloaded from {url} contains no words"
        )));
    }

    if let Some(parent) = cache_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut partial = cache_path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);
    tokio::fs::write(&partial, &body).await?;
    tokio::fs::rename(&partial, cache_path).await?;
    info!("Cached stopword list at {}", cache_path.display());

    Ok(body)
}
