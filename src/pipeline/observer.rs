//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::frequency::FrequencyTable;
use crate::types::{SentencePair, Sentiment};

// ─── Stage names ────────────────────────────────────────────────────────────

pub const STAGE_TRANSLATE: &str = "translate";
pub const STAGE_SENTIMENT: &str = "sentiment";
pub const STAGE_SENTENCES: &str = "sentences";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_FORMAT: &str = "format";

/// All stage names, in execution order.
pub const STAGES: &[&str] = &[
    STAGE_TRANSLATE,
    STAGE_SENTIMENT,
    STAGE_SENTENCES,
    STAGE_FREQUENCY,
    STAGE_FORMAT,
];

// ─── Timing ─────────────────────────────────────────────────────────────────

/// Measures the wall-clock duration of one stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Per-stage metrics handed to [`AnalyzerObserver::on_stage_end`].
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    /// Items produced by the stage (sentences paired, words counted), when
    /// the stage has a natural count.
    items: Option<usize>,
    /// Whether the stage degraded to a fallback.
    degraded: Option<bool>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
            degraded: None,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_degraded(mut self, degraded: bool) -> Self {
        self.degraded = Some(degraded);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }

    pub fn degraded(&self) -> Option<bool> {
        self.degraded
    }
}

// ─── Observer trait ─────────────────────────────────────────────────────────

/// Callbacks at analyzer stage boundaries. All methods have no-op defaults,
/// so implementations override only what they need.
pub trait AnalyzerObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called after translation with the working text and whether the
    /// translator fell back to the original.
    fn on_translation(&mut self, _text: &str, _degraded: bool) {}

    /// Called after document-level sentiment scoring.
    fn on_sentiment(&mut self, _sentiment: &Sentiment) {}

    /// Called after sentence pairing and per-sentence scoring.
    fn on_sentences(&mut self, _pairs: &[SentencePair]) {}

    /// Called after frequency counting.
    fn on_frequencies(&mut self, _table: &FrequencyTable) {}
}

/// Zero-overhead observer for callers that do not care about stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AnalyzerObserver for NoopObserver {}

/// Records the name and [`StageReport`] of every completed stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total time across all recorded stages.
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl AnalyzerObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_report_builder_fields() {
        let report = StageReport::new(Duration::from_millis(5))
            .with_items(7)
            .with_degraded(true);
        assert_eq!(report.items(), Some(7));
        assert_eq!(report.degraded(), Some(true));
        assert_eq!(report.elapsed(), Duration::from_millis(5));
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TRANSLATE, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_SENTIMENT, &StageReport::new(Duration::ZERO));
        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_TRANSLATE, STAGE_SENTIMENT]);
    }

    #[test]
    fn test_noop_observer_accepts_all_callbacks() {
        let mut obs = NoopObserver;
        obs.on_stage_start(STAGE_FORMAT);
        obs.on_translation("x", false);
        obs.on_sentiment(&Sentiment::neutral());
        obs.on_sentences(&[]);
        obs.on_frequencies(&FrequencyTable::default());
    }
}
