// Upload rules: accepted document kinds and the size limit.

use std::path::Path;

use anyhow::Result;

/// Largest accepted upload, 10 MB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Kinds of document the analyzer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Guess the kind from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" | "md" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(DocumentKind::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentKind::Docx)
            }
            "text/plain" | "text/markdown" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::PlainText => "text/plain",
        }
    }
}

/// Check an upload against the accepted kinds and the size limit.
pub fn validate_upload(path: &Path, size: u64, max_bytes: u64) -> Result<DocumentKind> {
    let Some(kind) = DocumentKind::from_path(path) else {
        anyhow::bail!(
            "Unsupported file type: {}. Please upload a PDF, DOCX or plain-text file.",
            path.display()
        );
    };
    if size > max_bytes {
        anyhow::bail!(
            "{} is {:.2} KB; files must be at most {} MB",
            path.display(),
            size as f64 / 1024.0,
            max_bytes / (1024 * 1024)
        );
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("a/report.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("memo.docx")), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_path(Path::new("notes.md")), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_path(Path::new("image.png")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_mime_round_trip() {
        for kind in [DocumentKind::Pdf, DocumentKind::Docx, DocumentKind::PlainText] {
            assert_eq!(DocumentKind::from_mime(kind.mime_type()), Some(kind));
        }
    }

    #[test]
    fn test_size_limit() {
        let path = Path::new("big.pdf");
        assert!(validate_upload(path, MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES).is_ok());
        let err = validate_upload(path, MAX_UPLOAD_BYTES + 1, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().contains("at most 10 MB"), "{err}");
    }

    #[test]
    fn test_unsupported_type() {
        let err = validate_upload(Path::new("photo.jpg"), 10, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }
}
