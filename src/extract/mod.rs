// Document text extraction — the input boundary of the analyzer.
//
// The analyzer only ever sees a `&str`. Getting that text out of an uploaded
// file is a collaborator's job: this module checks the upload rules and reads
// plain-text documents. PDF and Word parsing are left to external extractors
// implementing `DocumentTextExtractor`.

pub mod plain;
pub mod traits;
pub mod upload;

pub use plain::PlainTextExtractor;
pub use traits::DocumentTextExtractor;
pub use upload::{validate_upload, DocumentKind, MAX_UPLOAD_BYTES};

use anyhow::Result;

/// Reject extracted text that has nothing to analyze.
///
/// Empty or whitespace-only text is a caller-level failure ("no usable
/// text"), never something the analyzer itself errors on.
pub fn require_text(text: String, source: &str) -> Result<String> {
    if text.trim().is_empty() {
        anyhow::bail!("Could not extract any text from {source}");
    }
    Ok(text)
}
