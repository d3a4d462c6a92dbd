// Keyword extractor trait — swap-ready abstraction.
//
// The pipeline only depends on this trait, so the ranking strategy can change
// (plain frequency, TF-IDF) without touching the rest of the analysis.

/// Trait for ranking the keywords of a single document.
pub trait KeywordExtractor: Send + Sync {
    /// Return at most `MAX_KEYWORDS` lowercase keywords, best first.
    fn extract(&self, text: &str) -> Vec<String>;
}
