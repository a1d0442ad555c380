// src/parser/mod.rs
//! Format router: validates an uploaded file, picks the extraction
//! strategy for its extension, and hands the normalized text to the
//! field extractor.

pub mod pdf;
pub mod text;
pub mod word;

pub use pdf::{LopdfEngine, PdfTextEngine};
pub use text::normalize_text;
pub use word::PLACEHOLDER_TEXT;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analyze::FieldExtractor;
use crate::error::ParseError;
use crate::types::{ResumeData, ResumeMetadata, SupportedFormat, UploadedFile};
use crate::utils::{file_format_token, file_name_of, read_file_bytes};

const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Immutable parser limits: the format allow-list and the size ceiling.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub supported_formats: Vec<SupportedFormat>,
    pub max_file_size: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            supported_formats: SupportedFormat::ALL.to_vec(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl ParserConfig {
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn with_supported_formats(mut self, formats: Vec<SupportedFormat>) -> Self {
        self.supported_formats = formats;
        self
    }

    fn supported_tokens(&self) -> Vec<String> {
        self.supported_formats
            .iter()
            .map(|f| f.as_str().to_string())
            .collect()
    }
}

/// Stateless résumé parser. Holds only fixed configuration, the compiled
/// field-extraction patterns, and the optional PDF engine; every call is
/// independent, so one instance is safe to share across concurrent parses.
pub struct ResumeParser {
    config: ParserConfig,
    extractor: FieldExtractor,
    pdf_engine: Option<Box<dyn PdfTextEngine>>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            extractor: FieldExtractor::new(),
            pdf_engine: Some(Box::new(LopdfEngine)),
        }
    }

    /// Swap the page-text collaborator (tests, alternative renderers).
    pub fn with_pdf_engine(mut self, engine: Box<dyn PdfTextEngine>) -> Self {
        self.pdf_engine = Some(engine);
        self
    }

    /// Environments without a PDF renderer: PDF uploads then fail with
    /// [`ParseError::PdfEngineUnavailable`].
    pub fn without_pdf_engine(mut self) -> Self {
        self.pdf_engine = None;
        self
    }

    /// Parse one uploaded file into a structured [`ResumeData`] record.
    pub fn parse(&self, file: &UploadedFile) -> Result<ResumeData, ParseError> {
        let format = self.validate(file)?;

        info!(
            "Parsing {} ({} bytes, {})",
            file.name, file.declared_size, format
        );

        let (raw_text, page_count) = match format {
            SupportedFormat::Txt => (text::extract(&file.bytes)?, None),
            SupportedFormat::Pdf => {
                let (text, pages) = pdf::extract(self.pdf_engine.as_deref(), &file.bytes)?;
                (text, Some(pages))
            }
            SupportedFormat::Doc | SupportedFormat::Docx => {
                (normalize_text(&word::extract(&file.bytes)), None)
            }
        };

        debug!("Extracted {} chars from {}", raw_text.len(), file.name);

        let mut data = self.extractor.extract(&raw_text);
        data.metadata = ResumeMetadata {
            format,
            file_size: file.declared_size,
            page_count,
        };
        Ok(data)
    }

    /// Read a file from disk and parse it. Convenience for the CLI.
    pub async fn parse_path(&self, path: &Path) -> Result<ResumeData> {
        let bytes = read_file_bytes(path).await?;
        let file = UploadedFile::new(file_name_of(path), bytes);
        self.parse(&file)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Validation order is fixed: missing file, then size ceiling, then
    /// format. The first failing check wins; the size check runs before
    /// any content is touched.
    fn validate(&self, file: &UploadedFile) -> Result<SupportedFormat, ParseError> {
        if file.is_missing() {
            return Err(ParseError::MissingFile);
        }

        if file.declared_size > self.config.max_file_size {
            return Err(ParseError::FileTooLarge {
                limit_bytes: self.config.max_file_size,
            });
        }

        let token = file_format_token(&file.name);
        let format =
            SupportedFormat::from_extension(&token).ok_or_else(|| ParseError::UnsupportedFormat {
                detected: token.clone(),
                supported: self.config.supported_tokens(),
            })?;

        if !self.config.supported_formats.contains(&format) {
            return Err(ParseError::UnsupportedFormat {
                detected: token,
                supported: self.config.supported_tokens(),
            });
        }

        Ok(format)
    }
}
