//! Error types.
//!
//! Two layers: [`AnalyzeError`] for failures surfaced to the caller (bad
//! input files), and [`CapabilityError`] for failures inside an injected
//! capability. Capability failures never abort an analysis — the pipeline
//! catches them and falls back to the untranslated text (see
//! [`crate::pipeline::runner`]).

use std::path::PathBuf;

use thiserror::Error;

/// A failure the caller must handle. Only input decoding produces these;
/// everything downstream is fail-open.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The uploaded file has an extension outside the accepted set.
    #[error("unsupported file extension `{extension}` (accepted: txt, csv, md)")]
    UnsupportedExtension { extension: String },

    /// The file could not be read.
    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but failed validation.
    #[error("configuration rejected: {0} error(s), see diagnostics above")]
    ConfigRejected(usize),
}

/// A failure inside an injected capability (translation or sentiment
/// scoring). Opaque by design: the pipeline only needs to know *that* the
/// capability failed, not why.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The HTTP request to the translation endpoint failed.
    #[error("translation request failed")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered, but not in the shape we expected.
    #[error("unexpected response from translation endpoint: {0}")]
    MalformedResponse(String),

    /// Catch-all for custom capability implementations.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_message_lists_accepted_set() {
        let err = AnalyzeError::UnsupportedExtension {
            extension: "pdf".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pdf"));
        assert!(msg.contains("txt"));
        assert!(msg.contains("csv"));
        assert!(msg.contains("md"));
    }

    #[test]
    fn test_capability_error_other_passes_message_through() {
        let err = CapabilityError::Other("model not loaded".into());
        assert_eq!(err.to_string(), "model not loaded");
    }
}
