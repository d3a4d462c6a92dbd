// Keyword extraction — frequency ranking with a TF-IDF alternative.

pub mod frequency;
pub mod tfidf;
pub mod traits;

pub use frequency::FrequencyExtractor;
pub use tfidf::TfIdfExtractor;
pub use traits::KeywordExtractor;

use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum number of keywords reported for one document.
pub const MAX_KEYWORDS: usize = 8;

/// English function words that never count as keywords.
///
/// The list is English-only whatever the detected language of the text.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "this", "that",
    "which", "who", "will", "would", "could", "should",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Lower-case a raw token and keep only the letters `a`-`z`.
pub fn clean_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Whether a cleaned token may be reported as a keyword.
pub fn is_candidate(cleaned: &str) -> bool {
    cleaned.len() > 3 && !STOPWORD_SET.contains(cleaned)
}
