//! Built-in lexicon sentiment scorer.
//!
//! A compact stand-in for an external sentiment service: each lexicon word
//! carries a (polarity, subjectivity) pair, a preceding negator multiplies
//! polarity by −0.5, and the document score is the average over all
//! matches. Texts with no lexicon hits score neutral. English only — it is
//! meant to run on the *translated* text, like the service it replaces.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::error::CapabilityError;
use crate::nlp::tokenizer::tokenize;
use crate::types::Sentiment;

use super::SentimentScorer;

/// (polarity, subjectivity) per lexicon word.
static LEXICON: Lazy<FxHashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    let entries: &[(&str, f64, f64)] = &[
        ("amazing", 0.6, 0.9),
        ("awesome", 1.0, 1.0),
        ("beautiful", 0.85, 1.0),
        ("best", 1.0, 0.3),
        ("brilliant", 0.9, 0.9),
        ("clean", 0.4, 0.6),
        ("delicious", 1.0, 1.0),
        ("excellent", 1.0, 1.0),
        ("fantastic", 0.9, 0.9),
        ("friendly", 0.5, 0.6),
        ("good", 0.7, 0.6),
        ("great", 0.8, 0.75),
        ("happy", 0.8, 1.0),
        ("love", 0.5, 0.6),
        ("lovely", 0.8, 0.9),
        ("nice", 0.6, 1.0),
        ("perfect", 1.0, 1.0),
        ("pleasant", 0.73, 0.76),
        ("wonderful", 1.0, 1.0),
        ("angry", -0.8, 1.0),
        ("annoying", -0.7, 0.9),
        ("awful", -1.0, 1.0),
        ("bad", -0.7, 0.67),
        ("boring", -0.8, 1.0),
        ("broken", -0.4, 0.7),
        ("dirty", -0.6, 0.8),
        ("disappointing", -0.6, 0.7),
        ("hate", -0.8, 0.9),
        ("horrible", -1.0, 1.0),
        ("poor", -0.4, 0.6),
        ("sad", -0.5, 1.0),
        ("slow", -0.3, 0.4),
        ("terrible", -1.0, 1.0),
        ("ugly", -0.7, 0.8),
        ("useless", -0.5, 0.6),
        ("worst", -1.0, 1.0),
        ("wrong", -0.5, 0.5),
    ];
    entries.iter().map(|&(w, p, s)| (w, (p, s))).collect()
});

const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "neither", "nor"];

/// A [`SentimentScorer`] backed by the built-in lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<Sentiment, CapabilityError> {
        let tokens = tokenize(text);
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(polarity, subjectivity)) = LEXICON.get(token.as_str()) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            polarity_sum += if negated { polarity * -0.5 } else { polarity };
            subjectivity_sum += subjectivity;
            hits += 1;
        }

        if hits == 0 {
            return Ok(Sentiment::neutral());
        }
        Ok(Sentiment::new(
            polarity_sum / hits as f64,
            subjectivity_sum / hits as f64,
        ))
    }
}
