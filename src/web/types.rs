// src/web/types.rs
//! Request forms and response envelopes for the HTTP API

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

use crate::analyze::ExtractionReport;
use crate::core::AnalysisClient;
use crate::error::ParseError;
use crate::parser::ResumeParser;
use crate::types::{AtsAnalysis, ResumeData};

/// Shared, immutable per-server state.
pub struct AppState {
    pub parser: ResumeParser,
    pub analysis: Option<AnalysisClient>,
}

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub file: TempFile<'f>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ParseResponse {
    pub success: bool,
    pub resume: ResumeData,
    pub report: ExtractionReport,
}

/// `analysis_source` tells the client whether the scores came from the AI
/// service or the local structure-based fallback.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub resume: ResumeData,
    pub analysis: AtsAnalysis,
    pub analysis_source: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

impl From<&ParseError> for StandardErrorResponse {
    fn from(err: &ParseError) -> Self {
        let suggestions = match err {
            ParseError::MissingFile => vec!["Attach a resume file to the request".to_string()],
            ParseError::FileTooLarge { .. } => vec![
                "Compress your resume file".to_string(),
                "Use a smaller file size (max 10MB)".to_string(),
            ],
            ParseError::UnsupportedFormat { .. } => vec![
                "Upload a plain text file (.txt)".to_string(),
                "Upload a PDF file (.pdf)".to_string(),
                "Upload a Word document (.doc, .docx)".to_string(),
            ],
            ParseError::PdfEngineUnavailable | ParseError::PdfParseFailure(_) => vec![
                "Re-export the PDF and try again".to_string(),
                "Upload the resume as plain text".to_string(),
            ],
            ParseError::ReadFailure { .. } => {
                vec!["Check the file encoding and try again".to_string()]
            }
        };

        Self::new(err.to_string(), err.code().to_string(), suggestions)
    }
}
