//! Stopword filtering
//!
//! This module provides multi-language stopword filtering using the
//! `stop-words` crate with support for custom stopword lists. The default
//! filter is bilingual Spanish + English, the language pair the default
//! analyzer works across.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::bilingual()
    }
}

impl StopwordFilter {
    /// Create a stopword filter for a single language.
    ///
    /// Supported languages: en, es, fr, de, it, pt. Unknown codes fall back
    /// to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// The combined Spanish + English filter used by the default analyzer.
    pub fn bilingual() -> Self {
        let mut stopwords = Self::load_stopwords("es");
        stopwords.extend(Self::load_stopwords("en"));
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> =
            words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword. Case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "es" | "spanish" => LANGUAGE::Spanish,
            "fr" | "french" => LANGUAGE::French,
            "de" | "german" => LANGUAGE::German,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            // Default to English for unknown languages
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
