// src/analyze/report.rs
//! Quality review of an extracted record.
//!
//! Heuristic extraction is best-effort; this report tells the caller what
//! looks thin without ever raising. Only a near-empty document marks the
//! record invalid.

use serde::{Deserialize, Serialize};

use crate::types::ResumeData;

const MIN_EXPERIENCE_LEN: usize = 50;
const MIN_EDUCATION_LEN: usize = 20;
const MIN_RAW_TEXT_LEN: usize = 100;
const MAX_COMFORTABLE_LEN: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Review an extracted record against the expected résumé shape.
pub fn review(data: &ResumeData) -> ExtractionReport {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if data.personal_info.name.is_none() {
        warnings.push("Name not detected".to_string());
    }
    if data.personal_info.email.is_none() {
        warnings.push("Email not detected".to_string());
    }
    if data.experience.len() < MIN_EXPERIENCE_LEN {
        warnings.push("Experience section appears to be missing or very short".to_string());
    }
    if data.education.len() < MIN_EDUCATION_LEN {
        warnings.push("Education section appears to be missing or very short".to_string());
    }

    let mut is_valid = true;
    if data.raw_text.len() < MIN_RAW_TEXT_LEN {
        errors.push("Resume text appears to be too short".to_string());
        is_valid = false;
    }
    if data.raw_text.len() > MAX_COMFORTABLE_LEN {
        warnings.push("Resume is quite long - consider condensing to 1-2 pages".to_string());
    }

    ExtractionReport {
        is_valid,
        warnings,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::FieldExtractor;

    #[test]
    fn test_thin_record_collects_warnings() {
        let data = FieldExtractor::new().extract("just one short line");
        let report = review(&data);

        assert!(!report.is_valid);
        assert!(report
            .errors
            .contains(&"Resume text appears to be too short".to_string()));
        // The single line still reads as a "name", but contact details
        // and section bodies are all missing.
        assert!(!report.warnings.contains(&"Name not detected".to_string()));
        assert!(report
            .warnings
            .contains(&"Email not detected".to_string()));
        assert!(report
            .warnings
            .contains(&"Experience section appears to be missing or very short".to_string()));
    }

    #[test]
    fn test_reasonable_resume_is_valid() {
        let text = "Jane Doe\n\
            jane@example.com\n\
            Experience\n\
            Senior engineer at Acme for six years, building data pipelines\n\
            and owning the on-call rotation for ingestion services.\n\
            Education\n\
            BS Computer Science, State University\n\
            Skills\n\
            Rust, SQL, Kubernetes";
        let data = FieldExtractor::new().extract(text);
        let report = review(&data);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(!report.warnings.contains(&"Name not detected".to_string()));
        assert!(!report.warnings.contains(&"Email not detected".to_string()));
    }

    #[test]
    fn test_very_long_resume_warns() {
        let mut text = String::from("Jane Doe\njane@example.com\nExperience\n");
        for _ in 0..600 {
            text.push_str("shipped a thing that mattered to the business\n");
        }
        let data = FieldExtractor::new().extract(&text);
        let report = review(&data);

        assert!(report.is_valid);
        assert!(report
            .warnings
            .contains(&"Resume is quite long - consider condensing to 1-2 pages".to_string()));
    }
}
