// src/analyze/mod.rs
//! Field and section extractor: normalized text in, structured record out.
//!
//! Everything here is best-effort heuristic annotation. Absent fields come
//! back empty, never as errors; only the upstream file checks can fail a
//! parse.

mod personal;
mod report;
mod sections;
mod signals;

pub use report::{review, ExtractionReport};

use regex::Regex;

use crate::parser::text::normalize_text;
use crate::types::{ResumeData, ResumeMetadata};

/// Stateless extraction service: compiled patterns and keyword tables
/// only, no per-call fields. Construct once and share freely.
pub struct FieldExtractor {
    pub(crate) email_re: Regex,
    pub(crate) phone_re: Regex,
    pub(crate) phone_like_re: Regex,
    pub(crate) linkedin_re: Regex,
    pub(crate) years_re: Regex,
    pub(crate) range_re: Regex,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("hardcoded email pattern"),
            phone_re: Regex::new(
                r"\b(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b",
            )
            .expect("hardcoded phone pattern"),
            phone_like_re: Regex::new(r"^\d[\d\-\s]*\d$").expect("hardcoded phone-like pattern"),
            linkedin_re: Regex::new(r"(?i)(?:linkedin\.com/in/|linkedin\.com/)([a-zA-Z0-9\-]+)")
                .expect("hardcoded linkedin pattern"),
            years_re: Regex::new(r"(?i)(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)")
                .expect("hardcoded years pattern"),
            range_re: Regex::new(r"(?i)(\d{4})\s*[-–—]\s*(\d{4}|present|current)")
                .expect("hardcoded date-range pattern"),
        }
    }

    /// Produce the full structured record for one résumé text.
    ///
    /// The input is re-normalized first (a no-op for text that already
    /// went through an extraction strategy), so this is safe to call
    /// directly on arbitrary text. Metadata is left at its placeholder;
    /// the format router stamps the real values.
    pub fn extract(&self, text: &str) -> ResumeData {
        let raw_text = normalize_text(text);

        let personal_info = self.personal_info(&raw_text);
        let summary = sections::extract_section(&raw_text, sections::SUMMARY_KEYWORDS);
        let experience = sections::extract_section(&raw_text, sections::EXPERIENCE_KEYWORDS);
        let education = sections::extract_section(&raw_text, sections::EDUCATION_KEYWORDS);
        let skills = sections::extract_section(&raw_text, sections::SKILLS_KEYWORDS);
        let section_records = sections::identify_sections(&raw_text);

        ResumeData {
            raw_text,
            personal_info,
            summary,
            experience,
            education,
            skills,
            sections: section_records,
            metadata: ResumeMetadata::default(),
        }
    }
}
