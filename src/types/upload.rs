// src/types/upload.rs
//! Input file handed to the parser by the web layer or CLI

/// An uploaded résumé file: byte content plus the declared name, size and
/// MIME type reported by the transport. Immutable for the duration of one
/// parse call.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Declared file name; supplies the extension used for format routing.
    pub name: String,
    pub bytes: Vec<u8>,
    /// Size as reported by the caller. Checked against the ceiling before
    /// any content is read, so it may legitimately differ from
    /// `bytes.len()` when the transport reports size separately.
    pub declared_size: u64,
    pub content_type: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let declared_size = bytes.len() as u64;
        Self {
            name: name.into(),
            bytes,
            declared_size,
            content_type: None,
        }
    }

    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.declared_size = size;
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// A form post with no attachment arrives as a nameless, empty file.
    pub fn is_missing(&self) -> bool {
        self.name.is_empty() && self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_size_defaults_to_byte_length() {
        let file = UploadedFile::new("resume.txt", vec![0u8; 42]);
        assert_eq!(file.declared_size, 42);

        let file = file.with_declared_size(1000);
        assert_eq!(file.declared_size, 1000);
        assert_eq!(file.bytes.len(), 42);
    }

    #[test]
    fn test_missing_detection() {
        assert!(UploadedFile::new("", vec![]).is_missing());
        assert!(!UploadedFile::new("resume.txt", vec![]).is_missing());
        assert!(!UploadedFile::new("", vec![1]).is_missing());
    }
}
