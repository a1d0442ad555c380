// src/error.rs
//! Error taxonomy for the résumé parsing pipeline

use crate::types::SupportedFormat;
use thiserror::Error;

/// Terminal failures a single parse call can raise.
///
/// Field-level extraction never fails; only file validation and the
/// extraction strategies surface errors. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No file provided")]
    MissingFile,

    #[error("File size exceeds {}MB limit", .limit_bytes / (1024 * 1024))]
    FileTooLarge { limit_bytes: u64 },

    #[error("Unsupported file format: {}. Supported formats: {}", .detected, .supported.join(", "))]
    UnsupportedFormat {
        detected: String,
        supported: Vec<String>,
    },

    #[error("PDF engine not available")]
    PdfEngineUnavailable,

    #[error("PDF parsing failed: {0}")]
    PdfParseFailure(#[from] anyhow::Error),

    #[error("Failed to read {format} file: {reason}")]
    ReadFailure {
        format: SupportedFormat,
        reason: String,
    },
}

impl ParseError {
    /// Stable machine-readable code, used by the web layer and CLI output.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MissingFile => "NO_FILE",
            ParseError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            ParseError::UnsupportedFormat { .. } => "INVALID_FORMAT",
            ParseError::PdfEngineUnavailable
            | ParseError::PdfParseFailure(_)
            | ParseError::ReadFailure { .. } => "PARSE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::FileTooLarge {
            limit_bytes: 10 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "File size exceeds 10MB limit");

        let err = ParseError::UnsupportedFormat {
            detected: "odt".to_string(),
            supported: vec!["txt".into(), "pdf".into(), "doc".into(), "docx".into()],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported file format: odt. Supported formats: txt, pdf, doc, docx"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ParseError::MissingFile.code(), "NO_FILE");
        assert_eq!(
            ParseError::FileTooLarge { limit_bytes: 1 }.code(),
            "FILE_TOO_LARGE"
        );
        assert_eq!(ParseError::PdfEngineUnavailable.code(), "PARSE_ERROR");
    }
}
