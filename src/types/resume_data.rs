// src/types/resume_data.rs
//! Structured résumé record produced by the extraction pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// File formats the parser accepts, derived from the file name extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedFormat {
    Txt,
    Pdf,
    Doc,
    Docx,
}

impl SupportedFormat {
    pub const ALL: [SupportedFormat; 4] = [
        SupportedFormat::Txt,
        SupportedFormat::Pdf,
        SupportedFormat::Doc,
        SupportedFormat::Docx,
    ];

    /// Match a lower-cased extension token against the supported set.
    pub fn from_extension(token: &str) -> Option<Self> {
        match token {
            "txt" => Some(SupportedFormat::Txt),
            "pdf" => Some(SupportedFormat::Pdf),
            "doc" => Some(SupportedFormat::Doc),
            "docx" => Some(SupportedFormat::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedFormat::Txt => "txt",
            SupportedFormat::Pdf => "pdf",
            SupportedFormat::Doc => "doc",
            SupportedFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact fields pulled from the résumé text.
///
/// Every field is independently optional; `None` means "not found" and is
/// never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
}

/// Canonical section taxonomy, in the order records are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionName {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
    Leadership,
    References,
}

impl SectionName {
    pub const ALL: [SectionName; 9] = [
        SectionName::Summary,
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Certifications,
        SectionName::Awards,
        SectionName::Leadership,
        SectionName::References,
    ];
}

/// Presence of one canonical section in the document.
///
/// `matched_keywords` lists the configured keywords that matched at least
/// one line. Presence detection is a plain existence scan and is decoupled
/// from the boundary computation used for section bodies; the two can
/// disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    pub name: SectionName,
    pub present: bool,
    pub matched_keywords: Vec<String>,
}

/// Per-parse bookkeeping filled in by the format router.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMetadata {
    pub format: SupportedFormat,
    pub file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

impl Default for ResumeMetadata {
    /// Placeholder until the router stamps the real values.
    fn default() -> Self {
        Self {
            format: SupportedFormat::Txt,
            file_size: 0,
            page_count: None,
        }
    }
}

/// Top-level output of one parse call.
///
/// Section bodies are substrings of `raw_text`, or empty when the boundary
/// scan found nothing. All values are created fresh per call; the engine
/// keeps no state between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub raw_text: String,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub sections: Vec<SectionRecord>,
    pub metadata: ResumeMetadata,
}
