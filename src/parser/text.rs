// src/parser/text.rs
//! Plain-text extraction strategy and shared text normalization

use crate::error::ParseError;
use crate::types::SupportedFormat;

/// Normalize line endings and blank-line runs.
///
/// CRLF and bare CR become LF, runs of three or more newlines collapse to
/// exactly two (at most one blank line), and the result is trimmed.
/// Idempotent: re-normalizing already-normalized text is a no-op.
pub fn normalize_text(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut newline_run = 0usize;
    for ch in unified.chars() {
        if ch == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                out.push(ch);
            }
        } else {
            newline_run = 0;
            out.push(ch);
        }
    }

    out.trim().to_string()
}

/// Decode bytes as UTF-8 and normalize. The only failure mode is a
/// malformed byte sequence.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::ReadFailure {
        format: SupportedFormat::Txt,
        reason: e.to_string(),
    })?;
    Ok(normalize_text(text))
}
