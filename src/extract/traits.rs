// Extractor trait — swap-ready abstraction for getting text out of files.
//
// Implementations are async because real extractors read from disk or hand
// the file to an external service.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    /// Extract the plain text of the document at `path`.
    async fn extract_text(&self, path: &Path) -> Result<String>;
}
