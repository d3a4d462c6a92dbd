// Sentiment scorer trait.
//
// Mirrors the keyword extractor: the pipeline holds a `dyn SentimentScorer`,
// so a different lexicon or scoring rule can be swapped in.

use super::SentimentScore;

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}
