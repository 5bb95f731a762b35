//! # text-insight
//!
//! Text analysis over a translated document: stop-word-filtered word
//! frequencies, structural sentence splitting, and sentiment/subjectivity
//! reporting. Translation and sentiment scoring are injected capabilities
//! ([`capabilities::Translator`], [`capabilities::SentimentScorer`]) —
//! the crate orchestrates them but implements neither.
//!
//! ```
//! use text_insight::input::AnalysisInput;
//! use text_insight::pipeline::OfflineAnalyzer;
//!
//! let analyzer = OfflineAnalyzer::offline();
//! let report = analyzer.analyze(&AnalysisInput::from_text(
//!     "The zebra runs. The zebra sleeps!",
//! ));
//! assert_eq!(report.frequencies.get("zebra"), Some(2));
//! ```
//!
//! A failing translator never fails an analysis: the pipeline logs a
//! warning, flags the report, and continues with the original text.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod frequency;
pub mod input;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::AnalyzerConfig;
pub use error::{AnalyzeError, CapabilityError};
pub use frequency::{FrequencyCounter, FrequencyTable};
pub use input::AnalysisInput;
pub use pipeline::{Analyzer, AnalyzerBuilder, OfflineAnalyzer};
pub use types::{AnalysisReport, SentencePair, Sentiment};
