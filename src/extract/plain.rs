// Plain-text extractor for .txt and .md files.
//
// PDF and DOCX pass validation but are refused here: parsing them belongs to
// a dedicated extractor behind the same trait.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::traits::DocumentTextExtractor;
use super::upload::{validate_upload, DocumentKind, MAX_UPLOAD_BYTES};

/// Reads UTF-8 text files from disk.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    pub max_bytes: u64,
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

#[async_trait]
impl DocumentTextExtractor for PlainTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String> {
        let metadata = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let kind = validate_upload(path, metadata.len(), self.max_bytes)?;

        if kind != DocumentKind::PlainText {
            anyhow::bail!(
                "No text extractor available for {} ({}); convert it to plain text first",
                path.display(),
                kind.mime_type()
            );
        }

        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("{} is not valid UTF-8 text", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "Extracted plain text");
        Ok(text)
    }
}
