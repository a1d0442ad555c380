//! Heuristic résumé parsing and ATS analysis.
//!
//! An uploaded file is routed by extension to a text-extraction strategy
//! (plain text, PDF via a pluggable page-text engine, or a degraded decode
//! for legacy word-processor files), and the normalized text is annotated
//! into a structured [`ResumeData`] record: contact fields, section
//! presence, and section bodies. Extraction is best-effort by design;
//! missing fields are reported as absent, never as errors.
//!
//! The optional web layer and AI analysis client wrap the same engine for
//! service deployments. The engine itself performs no I/O beyond the byte
//! buffer it is handed.

use std::path::Path;

use anyhow::Result;

pub mod analyze;
pub mod core;
pub mod error;
pub mod parser;
pub mod types;
pub mod utils;
pub mod web;

pub use analyze::{review, ExtractionReport, FieldExtractor};
pub use error::ParseError;
pub use parser::{
    normalize_text, LopdfEngine, ParserConfig, PdfTextEngine, ResumeParser, PLACEHOLDER_TEXT,
};
pub use types::{
    AtsAnalysis, PersonalInfo, ResumeData, ResumeMetadata, SectionName, SectionRecord,
    SupportedFormat, UploadedFile,
};
pub use web::start_web_server;

/// Convenience function: parse a résumé file from disk with default limits.
pub async fn parse_resume_file(path: &Path) -> Result<ResumeData> {
    ResumeParser::new().parse_path(path).await
}
