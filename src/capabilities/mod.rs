//! Injected capability seams.
//!
//! Translation and sentiment scoring are third-party capabilities, not
//! algorithms of this crate. The pipeline consumes them through the
//! [`Translator`] and [`SentimentScorer`] traits and treats both as opaque:
//! any failure is caught upstream and the analysis falls back to the
//! untranslated text.
//!
//! Provided implementations:
//! - [`IdentityTranslator`] — returns the input unchanged (no-op default).
//! - [`HttpTranslator`](http::HttpTranslator) — blocking call to a
//!   Google-Translate-compatible endpoint.
//! - [`NeutralScorer`] — always neutral/objective (no-op default).
//! - [`LexiconScorer`](lexicon::LexiconScorer) — small built-in lexicon.

pub mod http;
pub mod lexicon;

use crate::error::CapabilityError;
use crate::types::Sentiment;

// ─── Translator ─────────────────────────────────────────────────────────────

/// Translates text between the configured language pair.
///
/// # Contract
///
/// - Returns the full translated text, sentence structure preserved as far
///   as the backing service allows.
/// - May fail for any reason; the caller falls back to the original text,
///   so implementations should not retry internally.
pub trait Translator {
    fn translate(&self, text: &str) -> Result<String, CapabilityError>;
}

/// No-op translator — returns the input unchanged.
///
/// The default when no translation backend is wired in; the analysis then
/// runs entirely on the original text.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> Result<String, CapabilityError> {
        Ok(text.to_string())
    }
}

// ─── Sentiment scorer ───────────────────────────────────────────────────────

/// Scores the sentiment of a text.
///
/// # Contract
///
/// - Polarity in [−1, 1], subjectivity in [0, 1].
/// - Called once for the whole document and once per translated sentence;
///   per-sentence failures are tolerated (the pair is reported unscored).
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<Sentiment, CapabilityError>;
}

/// No-op scorer — everything is neutral and objective.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralScorer;

impl SentimentScorer for NeutralScorer {
    fn score(&self, _text: &str) -> Result<Sentiment, CapabilityError> {
        Ok(Sentiment::neutral())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator_returns_input() {
        let out = IdentityTranslator.translate("hola mundo").unwrap();
        assert_eq!(out, "hola mundo");
    }

    #[test]
    fn test_neutral_scorer_is_zero() {
        let s = NeutralScorer.score("anything at all").unwrap();
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn test_traits_are_object_safe() {
        let tr: Box<dyn Translator> = Box::new(IdentityTranslator);
        let sc: Box<dyn SentimentScorer> = Box::new(NeutralScorer);
        assert_eq!(tr.translate("x").unwrap(), "x");
        assert_eq!(sc.score("x").unwrap(), Sentiment::neutral());
    }
}
