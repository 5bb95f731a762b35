//! Analysis pipeline: runner and observers.

pub mod observer;
pub mod runner;

pub use observer::{AnalyzerObserver, NoopObserver, StageTimingObserver};
pub use runner::{Analyzer, AnalyzerBuilder, OfflineAnalyzer};
