//! Analyzer configuration.
//!
//! [`AnalyzerConfig`] collects every tunable in one place: classification
//! thresholds, token-length cutoff, chart size, language pair, and extra
//! stop words. Validation never
//! short-circuits — [`AnalyzerConfig::validate`] collects every diagnostic
//! so users see all problems at once.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "min_token_len": 3,
//!   "top_words": 10,
//!   "max_sentences": 10,
//!   "positive_threshold": 0.05,
//!   "negative_threshold": -0.05,
//!   "subjectivity_threshold": 0.5,
//!   "source_lang": "es",
//!   "target_lang": "en",
//!   "extra_stopwords": []
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{SentimentLabel, SubjectivityLabel};

// ─── Config ─────────────────────────────────────────────────────────────────

/// Tunable parameters for one analyzer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Minimum token length kept by the frequency counter.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// Number of entries shown in the frequency chart.
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Number of sentence pairs shown in the report.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,

    /// Polarity strictly above this is classified positive.
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,

    /// Polarity strictly below this is classified negative.
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,

    /// Subjectivity strictly above this is classified high.
    #[serde(default = "default_subjectivity_threshold")]
    pub subjectivity_threshold: f64,

    /// Language of the submitted text.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Language the text is translated into before scoring.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    /// Stop words added on top of the built-in bilingual set.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Captures any fields not recognized by the schema; reported as
    /// warnings by validation.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_min_token_len() -> usize {
    3
}
fn default_top_words() -> usize {
    10
}
fn default_max_sentences() -> usize {
    10
}
fn default_positive_threshold() -> f64 {
    0.05
}
fn default_negative_threshold() -> f64 {
    -0.05
}
fn default_subjectivity_threshold() -> f64 {
    0.5
}
fn default_source_lang() -> String {
    "es".to_string()
}
fn default_target_lang() -> String {
    "en".to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_token_len: default_min_token_len(),
            top_words: default_top_words(),
            max_sentences: default_max_sentences(),
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
            subjectivity_threshold: default_subjectivity_threshold(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            extra_stopwords: Vec::new(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Classify a polarity value against the configured thresholds.
    pub fn classify_polarity(&self, polarity: f64) -> SentimentLabel {
        if polarity > self.positive_threshold {
            SentimentLabel::Positive
        } else if polarity < self.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Classify a subjectivity value against the configured threshold.
    pub fn classify_subjectivity(&self, subjectivity: f64) -> SubjectivityLabel {
        if subjectivity > self.subjectivity_threshold {
            SubjectivityLabel::High
        } else {
            SubjectivityLabel::Low
        }
    }

    /// Run every validation check and collect all diagnostics.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.positive_threshold < -1.0 || self.positive_threshold > 1.0 {
            report.push(ConfigDiagnostic::error(
                "positive_threshold",
                format!(
                    "must be within [-1, 1], got {}",
                    self.positive_threshold
                ),
            ));
        }
        if self.negative_threshold < -1.0 || self.negative_threshold > 1.0 {
            report.push(ConfigDiagnostic::error(
                "negative_threshold",
                format!(
                    "must be within [-1, 1], got {}",
                    self.negative_threshold
                ),
            ));
        }
        if self.negative_threshold >= self.positive_threshold {
            report.push(ConfigDiagnostic::error(
                "negative_threshold",
                format!(
                    "must be below positive_threshold ({} >= {})",
                    self.negative_threshold, self.positive_threshold
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.subjectivity_threshold) {
            report.push(ConfigDiagnostic::error(
                "subjectivity_threshold",
                format!(
                    "must be within [0, 1], got {}",
                    self.subjectivity_threshold
                ),
            ));
        }
        if self.top_words == 0 {
            report.push(ConfigDiagnostic::error(
                "top_words",
                "must be at least 1".to_string(),
            ));
        }
        if self.min_token_len == 0 {
            report.push(ConfigDiagnostic::warning(
                "min_token_len",
                "0 keeps every token, including single letters".to_string(),
            ));
        }
        if self.source_lang == self.target_lang {
            report.push(ConfigDiagnostic::warning(
                "target_lang",
                "source and target language are the same; translation is a no-op"
                    .to_string(),
            ));
        }
        for field in self.unknown_fields.keys() {
            report.push(ConfigDiagnostic::warning(
                field,
                "unrecognized field ignored".to_string(),
            ));
        }

        report
    }
}

// ─── Diagnostics ────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding: the offending field plus a message.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigDiagnostic {
    pub fn error(field: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message,
        }
    }

    pub fn warning(field: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message,
        }
    }
}

/// Collected diagnostics from validating a config.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ConfigDiagnostic>,
}

impl ValidationReport {
    fn push(&mut self, diagnostic: ConfigDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let report = AnalyzerConfig::default().validate();
        assert!(report.is_valid(), "{:?}", report.diagnostics);
        assert_eq!(report.diagnostics.len(), 0);
    }

    #[test]
    fn test_deserialize_empty_json_uses_defaults() {
        let cfg: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.min_token_len, 3);
        assert_eq!(cfg.top_words, 10);
        assert_eq!(cfg.positive_threshold, 0.05);
        assert_eq!(cfg.source_lang, "es");
        assert_eq!(cfg.target_lang, "en");
    }

    #[test]
    fn test_classify_polarity_thresholds_are_exclusive() {
        let cfg = AnalyzerConfig::default();
        // Exactly at a threshold stays neutral, matching the original
        // strict comparisons.
        assert_eq!(cfg.classify_polarity(0.05), SentimentLabel::Neutral);
        assert_eq!(cfg.classify_polarity(-0.05), SentimentLabel::Neutral);
        assert_eq!(cfg.classify_polarity(0.051), SentimentLabel::Positive);
        assert_eq!(cfg.classify_polarity(-0.051), SentimentLabel::Negative);
        assert_eq!(cfg.classify_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_classify_subjectivity_boundary() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(cfg.classify_subjectivity(0.5), SubjectivityLabel::Low);
        assert_eq!(cfg.classify_subjectivity(0.51), SubjectivityLabel::High);
    }

    #[test]
    fn test_inverted_thresholds_are_an_error() {
        let cfg = AnalyzerConfig {
            positive_threshold: -0.2,
            negative_threshold: 0.2,
            ..Default::default()
        };
        let report = cfg.validate();
        assert!(report.has_errors());
        assert!(report
            .errors()
            .any(|d| d.field == "negative_threshold"));
    }

    #[test]
    fn test_out_of_range_subjectivity_is_an_error() {
        let cfg = AnalyzerConfig {
            subjectivity_threshold: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().has_errors());
    }

    #[test]
    fn test_zero_top_words_is_an_error() {
        let cfg = AnalyzerConfig {
            top_words: 0,
            ..Default::default()
        };
        assert!(cfg.validate().has_errors());
    }

    #[test]
    fn test_same_language_pair_is_a_warning_not_error() {
        let cfg = AnalyzerConfig {
            source_lang: "en".into(),
            target_lang: "en".into(),
            ..Default::default()
        };
        let report = cfg.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_fields_reported_as_warnings() {
        let cfg: AnalyzerConfig =
            serde_json::from_str(r#"{ "bogus_knob": 42 }"#).unwrap();
        let report = cfg.validate();
        assert!(report.is_valid());
        assert!(report.warnings().any(|d| d.field == "bogus_knob"));
    }

    #[test]
    fn test_validation_collects_all_diagnostics() {
        let cfg = AnalyzerConfig {
            top_words: 0,
            subjectivity_threshold: 2.0,
            ..Default::default()
        };
        let report = cfg.validate();
        assert_eq!(report.errors().count(), 2);
    }
}
