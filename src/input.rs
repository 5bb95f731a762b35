//! Analysis input.
//!
//! Text arrives either typed directly or uploaded as a file. Files must be
//! one of the accepted plain-text extensions and are decoded as UTF-8 with
//! invalid sequences replaced — a mangled character should not block an
//! analysis, but a wrong file type should.

use std::fs;
use std::path::Path;

use crate::error::AnalyzeError;

/// File extensions accepted for upload.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "csv", "md"];

/// Raw text for one analysis. Lives only for the duration of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    text: String,
}

impl AnalysisInput {
    /// Input typed directly.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Input uploaded as raw bytes under a file name. The name is only
    /// used for extension validation.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self, AnalyzeError> {
        check_extension(Path::new(name))?;
        Ok(Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
        })
    }

    /// Input read from a file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AnalyzeError> {
        let path = path.as_ref();
        check_extension(path)?;
        let bytes = fs::read(path).map_err(|source| AnalyzeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// The decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the text contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn check_extension(path: &Path) -> Result<(), AnalyzeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(AnalyzeError::UnsupportedExtension { extension })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text_passes_through() {
        let input = AnalysisInput::from_text("hola mundo");
        assert_eq!(input.text(), "hola mundo");
        assert!(!input.is_blank());
    }

    #[test]
    fn test_blank_detection() {
        assert!(AnalysisInput::from_text("").is_blank());
        assert!(AnalysisInput::from_text("  \n\t ").is_blank());
    }

    #[test]
    fn test_from_bytes_accepts_known_extensions() {
        for name in ["notes.txt", "data.csv", "README.md", "UPPER.TXT"] {
            assert!(AnalysisInput::from_bytes(name, b"hello").is_ok(), "{name}");
        }
    }

    #[test]
    fn test_from_bytes_rejects_unknown_extensions() {
        let err = AnalysisInput::from_bytes("report.pdf", b"%PDF").unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::UnsupportedExtension { extension } if extension == "pdf"
        ));

        assert!(AnalysisInput::from_bytes("no_extension", b"x").is_err());
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let input = AnalysisInput::from_bytes("raw.txt", &[0x68, 0x6f, 0xff, 0x6c, 0x61])
            .unwrap();
        assert!(input.text().contains('\u{FFFD}'));
        assert!(input.text().starts_with("ho"));
    }

    #[test]
    fn test_from_file_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "texto de prueba").unwrap();

        let input = AnalysisInput::from_file(&path).unwrap();
        assert_eq!(input.text(), "texto de prueba");
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = AnalysisInput::from_file("/nonexistent/x.txt").unwrap_err();
        assert!(matches!(err, AnalyzeError::Io { .. }));
    }
}
