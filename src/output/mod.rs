// Output formatting — terminal display and report generation.
//
// Renderers only lay out an `AnalysisResult`; they never analyze anything.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use terminal::TerminalRenderer;

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::pipeline::analyze::AnalysisResult;

/// Details about a report that are not part of the analysis itself.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub generated_at: DateTime<Local>,
    /// File name or other label for where the text came from
    pub source: Option<String>,
}

impl ReportMeta {
    pub fn now(source: Option<String>) -> Self {
        Self {
            generated_at: Local::now(),
            source,
        }
    }

    /// e.g. "October 19, 2026 at 09:41"
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%B %-d, %Y at %H:%M").to_string()
    }
}

/// Turns an analysis into a finished report.
pub trait ReportRenderer {
    fn render(&self, result: &AnalysisResult, meta: &ReportMeta) -> Result<String>;
}

/// Rough size class of a document, by word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn from_word_count(word_count: usize) -> Self {
        if word_count > 500 {
            Complexity::High
        } else if word_count > 200 {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// A single word longer than `width` gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Arrange keyword badges into rows no wider than `width`.
///
/// A badge is the keyword plus `padding` characters; badges in a row are
/// separated by one space. A row always holds at least one badge.
pub fn layout_badges<'a>(keywords: &'a [String], width: usize, padding: usize) -> Vec<Vec<&'a str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut row: Vec<&str> = Vec::new();
    let mut x = 0;

    for keyword in keywords {
        let badge = keyword.chars().count() + padding;
        let needed = if row.is_empty() { badge } else { x + 1 + badge };
        if !row.is_empty() && needed > width {
            rows.push(std::mem::take(&mut row));
            x = 0;
        }
        x = if row.is_empty() { badge } else { x + 1 + badge };
        row.push(keyword);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
