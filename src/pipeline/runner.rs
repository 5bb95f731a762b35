//! Analyzer runner — orchestrates the blocking analysis sequence.
//!
//! One user action triggers one synchronous pass:
//! translate → score → split sentences → count frequencies → assemble.
//! The [`Analyzer`] is generic over its two capability seams and is built
//! with [`AnalyzerBuilder`]; the defaults ([`IdentityTranslator`],
//! [`NeutralScorer`]) make an analyzer that runs entirely offline.
//!
//! # Fail-open capabilities
//!
//! A translator failure is logged, flagged on the report, and the original
//! text is used downstream. A per-sentence scoring failure leaves that
//! pair unscored. Neither aborts the run; only input decoding can fail,
//! and that happens before the pipeline starts.

use tracing::warn;

use crate::capabilities::{IdentityTranslator, NeutralScorer, SentimentScorer, Translator};
use crate::config::AnalyzerConfig;
use crate::frequency::FrequencyCounter;
use crate::input::AnalysisInput;
use crate::nlp::sentences::{pair_sentences, split_sentences};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::observer::{
    AnalyzerObserver, NoopObserver, StageClock, StageReport, STAGE_FORMAT, STAGE_FREQUENCY,
    STAGE_SENTENCES, STAGE_SENTIMENT, STAGE_TRANSLATE,
};
use crate::types::{AnalysisReport, SentencePair, Sentiment};

// ============================================================================
// Analyzer
// ============================================================================

/// A configured analysis pipeline over two injected capabilities.
#[derive(Debug, Clone)]
pub struct Analyzer<Tr, Sc> {
    translator: Tr,
    scorer: Sc,
    config: AnalyzerConfig,
    counter: FrequencyCounter,
}

/// Type alias for the fully-offline default analyzer.
pub type OfflineAnalyzer = Analyzer<IdentityTranslator, NeutralScorer>;

impl OfflineAnalyzer {
    /// An analyzer with default config and no external capabilities.
    pub fn offline() -> Self {
        AnalyzerBuilder::new(AnalyzerConfig::default()).build()
    }
}

impl<Tr, Sc> Analyzer<Tr, Sc>
where
    Tr: Translator,
    Sc: SentimentScorer,
{
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full analysis with no observer.
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisReport {
        self.run(input, &mut NoopObserver)
    }

    /// Run the full analysis, notifying `observer` at each stage boundary.
    pub fn run(
        &self,
        input: &AnalysisInput,
        observer: &mut impl AnalyzerObserver,
    ) -> AnalysisReport {
        let original_text = input.text().to_string();

        // Stage: translate (fail-open).
        observer.on_stage_start(STAGE_TRANSLATE);
        let clock = StageClock::start();
        let (translated_text, translation_degraded) = {
            let _span = tracing::info_span!("analyzer_stage", stage = STAGE_TRANSLATE).entered();
            match self.translator.translate(&original_text) {
                Ok(text) => (text, false),
                Err(error) => {
                    warn!(%error, "translation failed; analyzing the original text");
                    (original_text.clone(), true)
                }
            }
        };
        let report = StageReport::new(clock.elapsed()).with_degraded(translation_degraded);
        observer.on_stage_end(STAGE_TRANSLATE, &report);
        observer.on_translation(&translated_text, translation_degraded);

        // Stage: document sentiment (fail-open to neutral).
        observer.on_stage_start(STAGE_SENTIMENT);
        let clock = StageClock::start();
        let sentiment = {
            let _span = tracing::info_span!("analyzer_stage", stage = STAGE_SENTIMENT).entered();
            match self.scorer.score(&translated_text) {
                Ok(sentiment) => sentiment,
                Err(error) => {
                    warn!(%error, "document sentiment scoring failed; reporting neutral");
                    Sentiment::neutral()
                }
            }
        };
        observer.on_stage_end(STAGE_SENTIMENT, &StageReport::new(clock.elapsed()));
        observer.on_sentiment(&sentiment);

        // Stage: sentence splitting, pairing, per-sentence scoring.
        observer.on_stage_start(STAGE_SENTENCES);
        let clock = StageClock::start();
        let sentences = {
            let _span = tracing::info_span!("analyzer_stage", stage = STAGE_SENTENCES).entered();
            let original_sentences = split_sentences(&original_text);
            let translated_sentences = split_sentences(&translated_text);
            pair_sentences(&original_sentences, &translated_sentences)
                .map(|(original, translated)| SentencePair {
                    original: original.clone(),
                    translated: translated.clone(),
                    sentiment: self.score_sentence(translated),
                })
                .collect::<Vec<_>>()
        };
        let report = StageReport::new(clock.elapsed()).with_items(sentences.len());
        observer.on_stage_end(STAGE_SENTENCES, &report);
        observer.on_sentences(&sentences);

        // Stage: word frequencies over the translated text.
        observer.on_stage_start(STAGE_FREQUENCY);
        let clock = StageClock::start();
        let frequencies = {
            let _span = tracing::info_span!("analyzer_stage", stage = STAGE_FREQUENCY).entered();
            self.counter.count(&translated_text)
        };
        let report = StageReport::new(clock.elapsed()).with_items(frequencies.len());
        observer.on_stage_end(STAGE_FREQUENCY, &report);
        observer.on_frequencies(&frequencies);

        // Stage: assemble the report.
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let report = AnalysisReport {
            sentiment,
            frequencies,
            sentences,
            original_text,
            translated_text,
            translation_degraded,
        };
        observer.on_stage_end(STAGE_FORMAT, &StageReport::new(clock.elapsed()));

        report
    }

    /// Score one translated sentence; `None` when the capability fails.
    fn score_sentence(&self, sentence: &str) -> Option<Sentiment> {
        match self.scorer.score(sentence) {
            Ok(sentiment) => Some(sentiment),
            Err(error) => {
                warn!(%error, sentence, "sentence scoring failed; pair left unscored");
                None
            }
        }
    }
}

// ============================================================================
// AnalyzerBuilder
// ============================================================================

/// Fluent builder for an [`Analyzer`] with custom capabilities.
///
/// ```
/// use text_insight::config::AnalyzerConfig;
/// use text_insight::capabilities::lexicon::LexiconScorer;
/// use text_insight::pipeline::runner::AnalyzerBuilder;
///
/// let analyzer = AnalyzerBuilder::new(AnalyzerConfig::default())
///     .scorer(LexiconScorer)
///     .build();
/// ```
pub struct AnalyzerBuilder<Tr = IdentityTranslator, Sc = NeutralScorer> {
    translator: Tr,
    scorer: Sc,
    config: AnalyzerConfig,
}

impl AnalyzerBuilder {
    /// Start from the given config with no-op capabilities.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            translator: IdentityTranslator,
            scorer: NeutralScorer,
            config,
        }
    }
}

impl<Tr, Sc> AnalyzerBuilder<Tr, Sc> {
    /// Override the translation capability.
    pub fn translator<T: Translator>(self, translator: T) -> AnalyzerBuilder<T, Sc> {
        AnalyzerBuilder {
            translator,
            scorer: self.scorer,
            config: self.config,
        }
    }

    /// Override the sentiment scoring capability.
    pub fn scorer<S: SentimentScorer>(self, scorer: S) -> AnalyzerBuilder<Tr, S> {
        AnalyzerBuilder {
            translator: self.translator,
            scorer,
            config: self.config,
        }
    }

    /// Consume the builder and produce an [`Analyzer`].
    ///
    /// The frequency counter is assembled here: the bilingual stop-word
    /// filter plus any `extra_stopwords` from the config.
    pub fn build(self) -> Analyzer<Tr, Sc> {
        let mut filter = StopwordFilter::bilingual();
        filter.add_stopwords(&self.config.extra_stopwords);
        let counter = FrequencyCounter::new(filter, self.config.min_token_len);
        Analyzer {
            translator: self.translator,
            scorer: self.scorer,
            config: self.config,
            counter,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
