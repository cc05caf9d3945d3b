//! Process-lifetime word lists.
//!
//! A [`Lexicon`] bundles the stopword set and the profanity dictionary. It is
//! built once at startup from the `[stopwords]` and `[profanity]` config
//! sections and then shared read-only through `Arc`s.

pub mod profanity;
pub mod stopwords;

use std::collections::HashSet;
use std::sync::Arc;

use log::info;

use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
use crate::config::{ProfanityConfig, StopwordConfig};
use crate::error::Result;

pub use profanity::ProfanityDictionary;
pub use stopwords::{StopwordSource, load_stopwords};

/// Parse a word list: one word per line, trimmed and lowercased.
/// Blank lines and `#` comments are skipped.
pub fn parse_word_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

/// The immutable word lists shared by every request.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: Arc<HashSet<String>>,
    profanity: Arc<ProfanityDictionary>,
}

impl Lexicon {
    /// Create a lexicon from already loaded parts.
    pub fn new(stop_words: HashSet<String>, profanity: ProfanityDictionary) -> Self {
        Lexicon {
            stop_words: Arc::new(stop_words),
            profanity: Arc::new(profanity),
        }
    }

    /// The built-in English stopwords and profanity list.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            ProfanityDictionary::new(),
        )
    }

    /// Load both word lists as configured.
    ///
    /// Any failure here is fatal: the service must not start with a partial
    /// lexicon.
    pub async fn load(stopwords: &StopwordConfig, profanity: &ProfanityConfig) -> Result<Self> {
        let source = stopwords.source()?;
        let stop_words = load_stopwords(&stopwords.language, &source).await?;
        let dictionary = load_profanity(profanity)?;

        info!(
            "Loaded lexicon: {} {} stopwords, {} profane words (leetspeak: {})",
            stop_words.len(),
            stopwords.language,
            dictionary.len(),
            dictionary.leetspeak()
        );

        Ok(Self::new(stop_words, dictionary))
    }

    /// Get the shared stopword set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// Get the shared profanity dictionary.
    pub fn profanity(&self) -> &Arc<ProfanityDictionary> {
        &self.profanity
    }
}

fn load_profanity(config: &ProfanityConfig) -> Result<ProfanityDictionary> {
    let mut dictionary = match &config.words_file {
        Some(path) => ProfanityDictionary::load_from_file(path)?,
        None => ProfanityDictionary::new(),
    };

    dictionary.add_words(&config.extra_words);
    for word in &config.allowed_words {
        dictionary.allow_word(word);
    }

    Ok(dictionary.with_leetspeak(config.leetspeak))
}
