// Single-document analysis: text -> AnalysisResult.
//
// The five fields are independent pure functions of the same input, so the
// order they are computed in does not matter and an `Analyzer` can be shared
// between threads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::KeywordBackend;
use crate::keywords::{FrequencyExtractor, KeywordExtractor, TfIdfExtractor};
use crate::language::detect_language;
use crate::sentiment::{LexiconScorer, Sentiment, SentimentScorer};
use crate::summary::Summarizer;

/// Everything reported about one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Leading sentences, at most 203 characters including the ellipsis
    pub summary: String,
    /// Up to 8 lowercase keywords, most frequent first
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    /// Language label, e.g. "French (Français)", "English" or "Unknown"
    pub language: String,
    pub word_count: usize,
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Runs every analysis stage over a document.
pub struct Analyzer {
    keywords: Box<dyn KeywordExtractor>,
    sentiment: Box<dyn SentimentScorer>,
    summarizer: Summarizer,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_backend(KeywordBackend::Frequency)
    }
}

impl Analyzer {
    pub fn new(keywords: Box<dyn KeywordExtractor>, sentiment: Box<dyn SentimentScorer>) -> Self {
        Self {
            keywords,
            sentiment,
            summarizer: Summarizer::default(),
        }
    }

    /// Analyzer using the given keyword backend and the lexicon scorer.
    pub fn with_backend(backend: KeywordBackend) -> Self {
        let keywords: Box<dyn KeywordExtractor> = match backend {
            KeywordBackend::Frequency => Box::new(FrequencyExtractor::default()),
            KeywordBackend::TfIdf => Box::new(TfIdfExtractor::default()),
        };
        Self::new(keywords, Box::new(LexiconScorer))
    }

    /// Analyze one document. Never fails: empty input produces an empty
    /// summary, no keywords, Neutral and "Unknown".
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let result = AnalysisResult {
            summary: self.summarizer.summarize(text),
            keywords: self.keywords.extract(text),
            sentiment: self.sentiment.score(text).label(),
            language: detect_language(text),
            word_count: word_count(text),
        };

        debug!(
            word_count = result.word_count,
            keywords = result.keywords.len(),
            sentiment = %result.sentiment,
            language = %result.language,
            "Analyzed document"
        );
        result
    }
}

/// Analyze a document with the default analyzer.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::default().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = analyze("");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.summary, "");
        assert!(result.keywords.is_empty());
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.language, "Unknown");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one\ttwo\n three  "), 3);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_russian_scenario() {
        let result = analyze("Это хорошо и прекрасно");
        assert_eq!(result.language, "Russian (Русский)");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.word_count, 4);
    }

    #[test]
    fn test_tfidf_backend_keeps_other_fields() {
        let text = "Gardens need patience. Patience brings flowers. Flowers need water.";
        let freq = Analyzer::with_backend(KeywordBackend::Frequency).analyze(text);
        let tfidf = Analyzer::with_backend(KeywordBackend::TfIdf).analyze(text);
        assert_eq!(freq.summary, tfidf.summary);
        assert_eq!(freq.language, tfidf.language);
        assert_eq!(freq.word_count, tfidf.word_count);
        assert!(tfidf.keywords.len() <= 8);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(analyze("Great day.")).unwrap();
        for field in ["summary", "keywords", "sentiment", "language", "word_count"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["sentiment"], "Positive");
    }
}
