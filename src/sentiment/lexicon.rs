// Lexicon sentiment scorer.
//
// Each lexicon word scores at most once, when it appears anywhere in the
// lower-cased text. Matching is substring containment, not whole-word: "bad"
// also hits inside "badge". The lexicons are English-only.

use super::traits::SentimentScorer;
use super::SentimentScore;

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "happy", "love", "joy",
    "beautiful", "awesome", "perfect", "best", "brilliant",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "sad", "hate", "worst", "angry", "disgusting", "poor",
    "disappointing", "unfortunate",
];

/// Scores text against fixed positive and negative word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let lower = text.to_lowercase();
        let hits = |words: &[&str]| words.iter().filter(|w| lower.contains(*w)).count();
        SentimentScore {
            positive: hits(POSITIVE_WORDS),
            negative: hits(NEGATIVE_WORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;

    #[test]
    fn test_lexicon_sizes() {
        assert_eq!(POSITIVE_WORDS.len(), 14);
        assert_eq!(NEGATIVE_WORDS.len(), 12);
    }

    #[test]
    fn test_positive() {
        let score = LexiconScorer.score("This is absolutely amazing and wonderful, I love it!");
        assert_eq!(score, SentimentScore { positive: 3, negative: 0 });
        assert_eq!(score.label(), Sentiment::Positive);
    }

    #[test]
    fn test_repeats_count_once() {
        let score = LexiconScorer.score("bad bad bad BAD");
        assert_eq!(score.negative, 1);
        assert_eq!(score.label(), Sentiment::Negative);
    }

    #[test]
    fn test_substring_matches() {
        // "badge" contains "bad", "goodbye" contains "good"
        let score = LexiconScorer.score("a badge and a goodbye");
        assert_eq!(score, SentimentScore { positive: 1, negative: 1 });
        assert_eq!(score.label(), Sentiment::Neutral);
    }

    #[test]
    fn test_non_english_is_neutral() {
        assert_eq!(LexiconScorer.score("Это хорошо и прекрасно").label(), Sentiment::Neutral);
    }
}
