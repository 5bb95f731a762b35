//! Stop-word-filtered word frequency counting.
//!
//! [`FrequencyCounter`] tokenizes a text, drops short tokens and stopwords,
//! and produces a [`FrequencyTable`] ordered by descending count. Ties keep
//! first-seen order: counts accumulate in insertion order and the final
//! sort is stable, so two words with the same count appear in the order
//! they first occurred in the text. Running the counter twice on the same
//! text yields identical ordered output.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokenize;

// ─── Table ──────────────────────────────────────────────────────────────────

/// One word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u32,
}

/// An ordered word → count mapping, descending by count.
///
/// Serialized as a sequence of entries so the ordering survives JSON
/// round-trips (a JSON object would not guarantee it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// All entries, descending by count.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// The `n` most frequent entries.
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..self.entries.len().min(n)]
    }

    /// Count for a specific word, if present.
    pub fn get(&self, word: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts — the number of qualifying tokens in the text.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

// ─── Counter ────────────────────────────────────────────────────────────────

/// Counts word frequencies with stopword and length filtering.
#[derive(Debug, Clone)]
pub struct FrequencyCounter {
    filter: StopwordFilter,
    /// Tokens shorter than this are discarded.
    min_token_len: usize,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(StopwordFilter::bilingual(), 3)
    }
}

impl FrequencyCounter {
    /// Create a counter with the given filter and minimum token length.
    pub fn new(filter: StopwordFilter, min_token_len: usize) -> Self {
        Self {
            filter,
            min_token_len,
        }
    }

    /// Count qualifying tokens in `text`.
    ///
    /// A token qualifies when its character length is at least
    /// `min_token_len` and it is not a stopword. Empty input yields an
    /// empty table.
    pub fn count(&self, text: &str) -> FrequencyTable {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut entries: Vec<FrequencyEntry> = Vec::new();

        for token in tokenize(text) {
            if token.chars().count() < self.min_token_len {
                continue;
            }
            if self.filter.is_stopword(&token) {
                continue;
            }
            match index.get(&token) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(token.clone(), entries.len());
                    entries.push(FrequencyEntry {
                        word: token,
                        count: 1,
                    });
                }
            }
        }

        // Stable sort over first-seen order keeps tie order deterministic.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        FrequencyTable { entries }
    }
}
