// Colored terminal output for analysis reports.
//
// Sections follow the printed report: title block, summary paragraph,
// keyword badges, a statistics table and an analysis-details footer.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;

use super::{layout_badges, truncate_chars, wrap_words, Complexity, ReportMeta, ReportRenderer};
use crate::pipeline::analyze::AnalysisResult;
use crate::pipeline::batch::DocumentOutcome;
use crate::sentiment::Sentiment;

/// Renders a report for a terminal, wrapping text to `width` columns.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    pub width: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self { width: 72 }
    }
}

impl ReportRenderer for TerminalRenderer {
    fn render(&self, result: &AnalysisResult, meta: &ReportMeta) -> Result<String> {
        let mut out = String::new();
        let inner = self.width.saturating_sub(2).max(1);

        writeln!(out, "\n{}", "=== Document Analysis Report ===".bold())?;
        writeln!(out, "  {}", format!("Generated on: {}", meta.generated_label()).dimmed())?;
        if let Some(source) = &meta.source {
            writeln!(out, "  {}", format!("Source: {source}").dimmed())?;
        }
        writeln!(out)?;

        writeln!(out, "{}", "SUMMARY".bright_blue().bold())?;
        if result.summary.trim().is_empty() {
            writeln!(out, "  {}", "(no summary)".dimmed())?;
        }
        for line in wrap_words(&result.summary, inner) {
            writeln!(out, "  {line}")?;
        }
        writeln!(out)?;

        writeln!(out, "{}", "KEYWORDS".bright_blue().bold())?;
        if result.keywords.is_empty() {
            writeln!(out, "  {}", "(none)".dimmed())?;
        }
        // Each badge renders as " keyword " plus brackets: 4 extra columns
        for row in layout_badges(&result.keywords, inner, 4) {
            let badges: Vec<String> = row
                .iter()
                .map(|kw| format!("[ {} ]", kw.white().on_blue()))
                .collect();
            writeln!(out, "  {}", badges.join(" "))?;
        }
        writeln!(out)?;

        writeln!(out, "{}", "STATISTICS".bright_blue().bold())?;
        writeln!(out, "  {:<12} {}", "Sentiment:".bold(), colorize_sentiment(result.sentiment))?;
        writeln!(out, "  {:<12} {}", "Language:".bold(), result.language)?;
        writeln!(out, "  {:<12} {}", "Word Count:".bold(), result.word_count)?;
        writeln!(out)?;

        let complexity = Complexity::from_word_count(result.word_count);
        writeln!(out, "{}", "ANALYSIS DETAILS".dimmed().bold())?;
        writeln!(out, "  Total Keywords Extracted: {}", result.keywords.len())?;
        writeln!(out, "  Document Complexity: {}", complexity.as_str())?;

        Ok(out)
    }
}

/// Display one line per document of a batch run.
pub fn display_batch(outcomes: &[DocumentOutcome]) {
    if outcomes.is_empty() {
        println!("No documents given.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Batch Analysis ({} documents) ===", outcomes.len()).bold()
    );
    println!();

    for (i, outcome) in outcomes.iter().enumerate() {
        let name = outcome.source.display().to_string();
        match &outcome.result {
            Ok(result) => {
                println!(
                    "  {:>3}. {:<32} {:<9} {:<24} {:>6} words",
                    i + 1,
                    truncate_chars(&name, 29),
                    colorize_sentiment(result.sentiment),
                    result.language,
                    result.word_count,
                );
                if !result.keywords.is_empty() {
                    println!("       Keywords: {}", result.keywords.join(", ").dimmed());
                }
            }
            Err(e) => {
                println!(
                    "  {:>3}. {:<32} {} {}",
                    i + 1,
                    truncate_chars(&name, 29),
                    "failed:".red(),
                    e
                );
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    println!();
    if failed > 0 {
        println!("  {} {} of {} documents failed", "!".bright_red(), failed, outcomes.len());
    }
}

/// Colorize a sentiment label.
fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.as_str().green().bold(),
        Sentiment::Negative => sentiment.as_str().magenta().bold(),
        Sentiment::Neutral => sentiment.as_str().dimmed(),
    }
}
