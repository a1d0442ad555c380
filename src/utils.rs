// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

/// Lower-cased token after the final `.` in a file name.
///
/// A name with no dot yields the whole name, so `resume` routes to the
/// unsupported-format error carrying `resume` as the detected token.
pub fn file_format_token(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Collapse every whitespace run (including newlines) to a single space
/// and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read file content as bytes with proper error context
pub async fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// File name component of a path, for building an [`UploadedFile`] from disk
///
/// [`UploadedFile`]: crate::types::UploadedFile
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_token() {
        assert_eq!(file_format_token("resume.pdf"), "pdf");
        assert_eq!(file_format_token("Resume.DOCX"), "docx");
        assert_eq!(file_format_token("archive.tar.gz"), "gz");
        // No extension: whole name is the token
        assert_eq!(file_format_token("resume"), "resume");
        assert_eq!(file_format_token(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a   b\t\tc"), "a b c");
        assert_eq!(
            collapse_whitespace("  line one\nline two  "),
            "line one line two"
        );
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of(Path::new("/tmp/uploads/cv.pdf")), "cv.pdf");
        assert_eq!(file_name_of(Path::new("cv.txt")), "cv.txt");
    }
}
