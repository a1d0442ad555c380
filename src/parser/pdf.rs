// src/parser/pdf.rs
//! PDF extraction strategy.
//!
//! Page text comes from a [`PdfTextEngine`] collaborator so the strategy
//! itself stays independent of any rendering library. The default engine
//! is backed by `lopdf`; a parser built without an engine fails with
//! [`ParseError::PdfEngineUnavailable`].

use anyhow::{Context, Result};

use crate::error::ParseError;
use crate::parser::text::normalize_text;
use crate::utils::collapse_whitespace;

/// Page-oriented text source for PDF bytes.
pub trait PdfTextEngine: Send + Sync {
    /// Extract the text of every page, in page order.
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// Default engine backed by `lopdf`.
pub struct LopdfEngine;

impl PdfTextEngine for LopdfEngine {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = lopdf::Document::load_mem(bytes).context("Failed to load PDF document")?;

        let mut pages: Vec<u32> = doc.get_pages().keys().cloned().collect();
        pages.sort();

        let mut texts = Vec::with_capacity(pages.len());
        for page in pages {
            // A page that fails to decode contributes an empty string
            // rather than aborting the document.
            texts.push(doc.extract_text(&[page]).unwrap_or_default());
        }
        Ok(texts)
    }
}

/// Run the strategy: one line per page, whitespace runs inside a page
/// collapsed to single spaces, pages concatenated strictly in page order.
/// Returns the normalized text and the page count.
pub(crate) fn extract(
    engine: Option<&dyn PdfTextEngine>,
    bytes: &[u8],
) -> Result<(String, usize), ParseError> {
    let engine = engine.ok_or(ParseError::PdfEngineUnavailable)?;

    let pages = engine
        .page_texts(bytes)
        .map_err(ParseError::PdfParseFailure)?;

    let mut full_text = String::new();
    for page in &pages {
        full_text.push_str(&collapse_whitespace(page));
        full_text.push('\n');
    }

    Ok((normalize_text(&full_text), pages.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEngine {
        pages: Vec<&'static str>,
    }

    impl PdfTextEngine for FakeEngine {
        fn page_texts(&self, _bytes: &[u8]) -> Result<Vec<String>> {
            Ok(self.pages.iter().map(|p| p.to_string()).collect())
        }
    }

    struct BrokenEngine;

    impl PdfTextEngine for BrokenEngine {
        fn page_texts(&self, _bytes: &[u8]) -> Result<Vec<String>> {
            anyhow::bail!("corrupt xref table")
        }
    }

    #[test]
    fn test_pages_concatenate_in_order() {
        let engine = FakeEngine {
            pages: vec!["A", "B", "C"],
        };
        let (text, page_count) = extract(Some(&engine), b"%PDF-").unwrap();
        assert_eq!(text, "A\nB\nC");
        assert_eq!(page_count, 3);
    }

    #[test]
    fn test_page_whitespace_collapses() {
        let engine = FakeEngine {
            pages: vec!["John   Smith\nSenior  Engineer", "Second   page"],
        };
        let (text, _) = extract(Some(&engine), b"%PDF-").unwrap();
        assert_eq!(text, "John Smith Senior Engineer\nSecond page");
    }

    #[test]
    fn test_missing_engine_fails() {
        let err = extract(None, b"%PDF-").unwrap_err();
        assert!(matches!(err, ParseError::PdfEngineUnavailable));
    }

    #[test]
    fn test_engine_fault_wraps_into_parse_failure() {
        let err = extract(Some(&BrokenEngine), b"%PDF-").unwrap_err();
        match err {
            ParseError::PdfParseFailure(source) => {
                assert!(source.to_string().contains("corrupt xref table"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_document() {
        let engine = FakeEngine { pages: vec![] };
        let (text, page_count) = extract(Some(&engine), b"%PDF-").unwrap();
        assert_eq!(text, "");
        assert_eq!(page_count, 0);
    }
}
