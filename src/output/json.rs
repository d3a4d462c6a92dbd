// JSON report: the analysis fields plus report metadata.

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

use super::{Complexity, ReportMeta, ReportRenderer};
use crate::pipeline::analyze::AnalysisResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    keyword_count: usize,
    complexity: Complexity,
    generated_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, result: &AnalysisResult, meta: &ReportMeta) -> Result<String> {
        let report = JsonReport {
            result,
            keyword_count: result.keywords.len(),
            complexity: Complexity::from_word_count(result.word_count),
            generated_at: meta.generated_at,
            source: meta.source.as_deref(),
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }
}
