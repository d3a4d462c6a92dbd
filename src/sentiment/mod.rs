// Sentiment scoring — lexicon hit counts and a three-way label.

pub mod lexicon;
pub mod traits;

pub use lexicon::LexiconScorer;
pub use traits::SentimentScorer;

use serde::{Deserialize, Serialize};

/// Coarse sentiment of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive and negative lexicon hits for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    /// Whichever side has more hits; equal counts (including 0-0) are Neutral.
    pub fn label(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let score = |positive, negative| SentimentScore { positive, negative }.label();
        assert_eq!(score(2, 0), Sentiment::Positive);
        assert_eq!(score(1, 3), Sentiment::Negative);
        assert_eq!(score(2, 2), Sentiment::Neutral);
        assert_eq!(score(0, 0), Sentiment::Neutral);
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Sentiment::Positive).unwrap(), "\"Positive\"");
        assert_eq!(Sentiment::Neutral.to_string(), "Neutral");
    }
}
