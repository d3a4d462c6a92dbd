// Batch analysis: many documents with bounded concurrency.
//
// Each document is extracted through the async extractor, then analyzed on
// tokio's blocking pool since analysis is CPU-bound. A failure or timeout on
// one document is recorded for that document and does not stop the others.
// Outcomes come back in input order.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::analyze::{AnalysisResult, Analyzer};
use crate::extract::{require_text, DocumentTextExtractor};

/// Knobs for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Documents processed at the same time (minimum 1)
    pub concurrency: usize,
    /// Give up on a single document after this long
    pub timeout: Option<Duration>,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            timeout: None,
            show_progress: false,
        }
    }
}

/// The outcome of analyzing one document in a batch.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub source: PathBuf,
    pub result: Result<AnalysisResult>,
}

/// Extract and analyze one document.
async fn analyze_one(
    analyzer: Arc<Analyzer>,
    extractor: &dyn DocumentTextExtractor,
    path: PathBuf,
) -> Result<AnalysisResult> {
    let text = extractor.extract_text(&path).await?;
    let text = require_text(text, &path.display().to_string())?;
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&text)).await?;
    Ok(result)
}

/// Analyze every path, `options.concurrency` at a time.
pub async fn analyze_documents(
    analyzer: Arc<Analyzer>,
    extractor: &dyn DocumentTextExtractor,
    paths: &[PathBuf],
    options: &BatchOptions,
) -> Vec<DocumentOutcome> {
    let concurrency = options.concurrency.max(1);
    info!(
        documents = paths.len(),
        concurrency,
        "Starting batch analysis"
    );

    let pb = if options.show_progress {
        ProgressBar::new(paths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let timeout = options.timeout;
    let outcomes: Vec<DocumentOutcome> = stream::iter(paths.iter().cloned().map(|path| {
        let analyzer = Arc::clone(&analyzer);
        let pb = pb.clone();
        async move {
            let work = analyze_one(analyzer, extractor, path.clone());
            let result = match timeout {
                Some(limit) => match tokio::time::timeout(limit, work).await {
                    Ok(result) => result,
                    Err(_) => Err(anyhow::anyhow!(
                        "Analysis of {} timed out after {:?}",
                        path.display(),
                        limit
                    )),
                },
                None => work.await,
            };
            if let Err(e) = &result {
                warn!(path = %path.display(), error = %e, "Document failed, skipping");
            }
            pb.inc(1);
            DocumentOutcome {
                source: path,
                result,
            }
        }
    }))
    .buffered(concurrency)
    .collect()
    .await;
    pb.finish_and_clear();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        analyzed = outcomes.len() - failed,
        failed,
        "Batch analysis complete"
    );
    outcomes
}
