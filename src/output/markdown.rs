// Markdown report — the same sections as the terminal report, as a document
// that can be saved or converted further.

use std::fmt::Write;

use anyhow::Result;

use super::{Complexity, ReportMeta, ReportRenderer};
use crate::pipeline::analyze::AnalysisResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

/// Escape characters that would break a Markdown table cell.
fn table_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, result: &AnalysisResult, meta: &ReportMeta) -> Result<String> {
        let mut md = String::new();

        writeln!(md, "# Document Analysis Report")?;
        writeln!(md)?;
        writeln!(md, "_Generated on: {}_", meta.generated_label())?;
        if let Some(source) = &meta.source {
            writeln!(md)?;
            writeln!(md, "Source: `{source}`")?;
        }
        writeln!(md)?;

        writeln!(md, "## Summary")?;
        writeln!(md)?;
        if result.summary.trim().is_empty() {
            writeln!(md, "_No summary available._")?;
        } else {
            writeln!(md, "{}", result.summary.trim())?;
        }
        writeln!(md)?;

        writeln!(md, "## Keywords")?;
        writeln!(md)?;
        if result.keywords.is_empty() {
            writeln!(md, "_No keywords found._")?;
        } else {
            let badges: Vec<String> = result.keywords.iter().map(|k| format!("`{k}`")).collect();
            writeln!(md, "{}", badges.join(" "))?;
        }
        writeln!(md)?;

        writeln!(md, "## Statistics")?;
        writeln!(md)?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Sentiment | {} |", result.sentiment)?;
        writeln!(md, "| Language | {} |", table_cell(&result.language))?;
        writeln!(md, "| Word Count | {} |", result.word_count)?;
        writeln!(md)?;

        let complexity = Complexity::from_word_count(result.word_count);
        writeln!(md, "## Analysis Details")?;
        writeln!(md)?;
        writeln!(md, "- Total Keywords Extracted: {}", result.keywords.len())?;
        writeln!(md, "- Document Complexity: {}", complexity.as_str())?;

        Ok(md)
    }
}
