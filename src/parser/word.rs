// src/parser/word.rs
//! Degraded extraction for legacy word-processor files.
//!
//! This path does not parse the DOC/DOCX container format. It decodes the
//! raw bytes as text, strips everything outside printable ASCII, and falls
//! back to a fixed placeholder when the result is mostly binary noise.
//! That is the documented contract for these formats, not a bug.

use crate::utils::collapse_whitespace;

/// Returned when decoding yielded fewer than 50 printable characters.
pub const PLACEHOLDER_TEXT: &str = "Resume content - Word document parsing requires additional \
     libraries for full text extraction. Please upload a PDF or TXT file for best results.";

const MIN_MEANINGFUL_LEN: usize = 50;

/// Lossy decode; never fails. Bytes outside `0x20..=0x7E` (other than
/// newline, carriage return and tab) become spaces before whitespace runs
/// are collapsed.
pub(crate) fn extract(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);

    let stripped: String = decoded
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => c,
            ' '..='~' => c,
            _ => ' ',
        })
        .collect();

    let text = collapse_whitespace(&stripped);

    if text.len() < MIN_MEANINGFUL_LEN {
        PLACEHOLDER_TEXT.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_decode_yields_placeholder() {
        // Mostly binary noise decodes to almost nothing
        let bytes: Vec<u8> = (0u8..32).cycle().take(200).collect();
        assert_eq!(extract(&bytes), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_meaningful_text_survives() {
        let body = "Jane Doe, software engineer with ten years of experience building services.";
        let mut bytes = vec![0x01, 0x02, 0x03];
        bytes.extend_from_slice(body.as_bytes());
        bytes.extend_from_slice(&[0x00, 0x7F]);

        let text = extract(&bytes);
        assert!(text.contains("Jane Doe, software engineer"));
        assert_ne!(text, PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_control_bytes_become_single_spaces() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"word");
        bytes.extend_from_slice(&[0x00, 0x01, 0x02, 0x03]);
        bytes.extend_from_slice(b"gap and enough trailing text to clear the length floor easily");

        let text = extract(&bytes);
        assert!(text.contains("word gap"));
    }

    #[test]
    fn test_placeholder_threshold_is_exclusive() {
        // Exactly 50 printable chars is kept, 49 is not
        let keep = "x".repeat(50);
        assert_eq!(extract(keep.as_bytes()), keep);

        let drop = "x".repeat(49);
        assert_eq!(extract(drop.as_bytes()), PLACEHOLDER_TEXT);
    }
}
