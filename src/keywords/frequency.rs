// Frequency-ranked keyword extraction — the default extractor.
//
// Tokens are counted in first-seen order and then stable-sorted by count, so
// words with equal counts keep the order they first appeared in.

use std::collections::HashMap;

use super::traits::KeywordExtractor;
use super::{clean_token, is_candidate, MAX_KEYWORDS};

/// Ranks words by how often they occur in the document.
#[derive(Debug, Clone)]
pub struct FrequencyExtractor {
    pub max_keywords: usize,
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self {
            max_keywords: MAX_KEYWORDS,
        }
    }
}

/// Count candidate tokens, preserving first-occurrence order.
pub fn count_candidates(text: &str) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in text.split_whitespace() {
        let cleaned = clean_token(token);
        if !is_candidate(&cleaned) {
            continue;
        }
        match index.get(&cleaned) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(cleaned.clone(), order.len());
                order.push((cleaned, 1));
            }
        }
    }

    order
}

impl KeywordExtractor for FrequencyExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut counted = count_candidates(text);
        // sort_by is stable: ties stay in first-seen order
        counted.sort_by(|a, b| b.1.cmp(&a.1));
        counted
            .into_iter()
            .take(self.max_keywords.min(MAX_KEYWORDS))
            .map(|(word, _)| word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_first() {
        let text = "wonderful garden wonderful flowers wonderful trees wonderful \
                    sunshine wonderful";
        let keywords = FrequencyExtractor::default().extract(text);
        assert_eq!(keywords, vec!["wonderful", "garden", "flowers", "trees", "sunshine"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let keywords = FrequencyExtractor::default().extract("zebra apple mango apple zebra mango");
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_caps_at_eight() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo";
        let keywords = FrequencyExtractor::default().extract(text);
        assert_eq!(keywords.len(), 8);
        assert_eq!(keywords[0], "alpha");
        assert_eq!(keywords[7], "hotel");
    }

    #[test]
    fn test_short_and_stopwords_dropped() {
        let keywords = FrequencyExtractor::default().extract("The cat was with that dog, which ran.");
        assert!(keywords.is_empty(), "got {keywords:?}");
    }

    #[test]
    fn test_punctuation_merges_tokens() {
        let counted = count_candidates("Hello, hello! HELLO?");
        assert_eq!(counted, vec![("hello".to_string(), 3)]);
    }

    #[test]
    fn test_empty() {
        assert!(FrequencyExtractor::default().extract("").is_empty());
    }
}
