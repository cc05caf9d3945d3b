//! Profanity dictionary.
//!
//! The dictionary answers one question: is this word profane? A word matches
//! when it equals a dictionary entry, or (with leetspeak matching enabled)
//! when it spells an entry with look-alike substitutions such as `sh1t` or
//! `d4mn`. Words on the allow list never match.

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::{LancetError, Result};
use crate::lexicon::parse_word_list;

/// Built-in English profanity list.
///
/// A curated list of common English profanity and obvious variants. It is
/// deliberately smaller than exhaustive public lists; deployments that need
/// broader coverage load their own list through `[profanity] words_file`.
pub const DEFAULT_PROFANE_WORDS: &[&str] = &[
    "anal", "anus", "arse", "arsehead", "arsehole", "ass", "asses", "asshat", "asshole",
    "assholes", "asswipe", "ballsack", "bastard", "bastards", "bellend", "bitch", "bitchass",
    "bitches", "bitching", "bitchy", "blowjob", "blowjobs", "bollock", "bollocks", "bollox",
    "boner", "boob", "boobs", "bugger", "bullshit", "bullshitter", "buttfuck", "butthead",
    "butthole", "chickenshit", "clit", "cock", "cocks", "cocksucker", "cocksucking",
    "crap", "crappy", "cum", "cumshot", "cunt", "cunts", "damn", "damned", "damnit", "dick",
    "dickface", "dickhead", "dicks", "dickwad", "dildo", "dipshit", "douche", "douchebag",
    "dumbass", "dumbasses", "dumbfuck", "fatass", "fuck", "fucked", "fucker", "fuckers",
    "fuckface", "fuckhead", "fuckin", "fucking", "fuckoff", "fucks", "fuckup", "fuckwit",
    "goddammit", "goddamn", "goddamned", "handjob", "hardon", "hell", "horny", "horseshit",
    "jackass", "jackoff", "jerkoff", "jizz", "knobend", "minge", "motherfucker",
    "motherfuckers", "motherfuckin", "motherfucking", "muff", "numbnuts", "nutsack", "orgasm",
    "penis", "piss", "pissed", "pissing", "pissoff", "porn", "prick", "pricks", "punani", "pussy",
    "queef", "rimjob", "scrotum", "semen", "shag", "shit", "shitface", "shithead", "shithole",
    "shits", "shitter", "shitting", "shitty", "skank", "slag", "slut", "sluts", "smartass",
    "spunk", "stfu", "testicle", "tit", "tits", "titties", "tosser", "turd", "twat", "vagina",
    "wank", "wanker", "wankers", "wanking", "whore", "whores", "wtf",
];

/// Word-character look-alikes accepted in place of a dictionary character.
fn is_substitute(candidate: char, expected: char) -> bool {
    match expected {
        'a' => candidate == '4',
        'e' => candidate == '3',
        'i' => candidate == '1' || candidate == 'l',
        'l' => candidate == '1',
        'o' => candidate == '0',
        's' => candidate == '5',
        't' => candidate == '7',
        'u' => candidate == 'v',
        'v' => candidate == 'u',
        _ => false,
    }
}

/// A fixed set of profane terms queried by whole-word match.
#[derive(Debug, Clone)]
pub struct ProfanityDictionary {
    /// Normalized (lowercase) dictionary entries
    words: AHashSet<String>,
    /// Entries grouped by character count, for leetspeak comparison
    by_length: AHashMap<usize, Vec<String>>,
    /// Words that are never reported
    allowed: AHashSet<String>,
    /// Whether look-alike spellings are matched
    leetspeak: bool,
}

impl ProfanityDictionary {
    /// Create an empty dictionary with leetspeak matching enabled.
    pub fn empty() -> Self {
        ProfanityDictionary {
            words: AHashSet::new(),
            by_length: AHashMap::new(),
            allowed: AHashSet::new(),
            leetspeak: true,
        }
    }

    /// Create a dictionary with the built-in English word list.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_PROFANE_WORDS.iter().copied())
    }

    /// Create a dictionary from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::empty();
        dictionary.add_words(words);
        dictionary
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LancetError::lexicon(format!(
                "Failed to read profanity list {}: {e}",
                path.display()
            ))
        })?;

        Ok(Self::from_words(parse_word_list(&content)))
    }

    /// Enable or disable leetspeak matching.
    pub fn with_leetspeak(mut self, enabled: bool) -> Self {
        self.leetspeak = enabled;
        self
    }

    /// Add a word to the dictionary.
    pub fn add_word(&mut self, word: &str) {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return;
        }

        if self.words.insert(normalized.clone()) {
            self.by_length
                .entry(normalized.chars().count())
                .or_default()
                .push(normalized);
        }
    }

    /// Add several words to the dictionary.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Never report `word`, even if it is in the dictionary.
    pub fn allow_word(&mut self, word: &str) {
        let normalized = word.trim().to_lowercase();
        if !normalized.is_empty() {
            self.allowed.insert(normalized);
        }
    }

    /// Check whether a single word is profane.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        if self.allowed.contains(&word) {
            return false;
        }
        if self.words.contains(&word) {
            return true;
        }
        self.leetspeak && self.matches_leetspeak(&word)
    }

    fn matches_leetspeak(&self, word: &str) -> bool {
        let Some(candidates) = self.by_length.get(&word.chars().count()) else {
            return false;
        };

        candidates.iter().any(|entry| {
            word.chars()
                .zip(entry.chars())
                .all(|(c, e)| c == e || is_substitute(c, e))
        })
    }

    /// Whether leetspeak matching is enabled.
    pub fn leetspeak(&self) -> bool {
        self.leetspeak
    }

    /// Get the number of dictionary entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ProfanityDictionary {
    fn default() -> Self {
        Self::new()
    }
}
