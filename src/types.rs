//! Core value types shared across the pipeline.
//!
//! Everything here is an immutable snapshot: once an [`AnalysisReport`] is
//! assembled by the runner it is never mutated, and nothing outlives the
//! single analysis that produced it.

use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

// ─── Sentiment ──────────────────────────────────────────────────────────────

/// A sentiment measurement: polarity in [−1, 1] (negative → positive) and
/// subjectivity in [0, 1] (objective → subjective).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Build a sentiment, clamping both scalars into their valid ranges.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Fully neutral, fully objective.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Polarity remapped from [−1, 1] to [0, 1], for progress-style display.
    pub fn normalized_polarity(&self) -> f64 {
        (self.polarity + 1.0) / 2.0
    }
}

// ─── Classification labels ──────────────────────────────────────────────────

/// Polarity classified against the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// User-facing name, as printed in banners.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Subjectivity classified against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectivityLabel {
    High,
    Low,
}

impl SubjectivityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

// ─── Sentence pairs ─────────────────────────────────────────────────────────

/// An original sentence aligned with its translation.
///
/// `sentiment` is `None` when per-sentence scoring failed for this pair;
/// the pair is still reported with both texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    pub original: String,
    pub translated: String,
    pub sentiment: Option<Sentiment>,
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// The result of one analysis run — the public contract of the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Document-level sentiment, scored over the translated text.
    pub sentiment: Sentiment,

    /// Word frequencies over the translated text, descending by count.
    pub frequencies: FrequencyTable,

    /// Aligned sentences, truncated to the shorter of the two splits.
    pub sentences: Vec<SentencePair>,

    /// The text as submitted.
    pub original_text: String,

    /// The text after translation. Equal to `original_text` when the
    /// translator failed or was the identity.
    pub translated_text: String,

    /// Set when the translation capability failed and the analysis
    /// proceeded on the original text.
    pub translation_degraded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_new_clamps_out_of_range() {
        let s = Sentiment::new(1.7, -0.3);
        assert_eq!(s.polarity, 1.0);
        assert_eq!(s.subjectivity, 0.0);

        let s = Sentiment::new(-2.0, 1.5);
        assert_eq!(s.polarity, -1.0);
        assert_eq!(s.subjectivity, 1.0);
    }

    #[test]
    fn test_normalized_polarity_maps_endpoints() {
        assert_eq!(Sentiment::new(-1.0, 0.0).normalized_polarity(), 0.0);
        assert_eq!(Sentiment::new(0.0, 0.0).normalized_polarity(), 0.5);
        assert_eq!(Sentiment::new(1.0, 0.0).normalized_polarity(), 1.0);
    }

    #[test]
    fn test_labels_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&SubjectivityLabel::High).unwrap(),
            "\"high\""
        );
    }
}
