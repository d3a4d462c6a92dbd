// TF-IDF keyword extraction — alternative ranking backend.
//
// Uses the `keyword_extraction` crate with each sentence of the document
// treated as a separate document for IDF. Words spread evenly across every
// sentence get downweighted; words concentrated in a few sentences rise.
// The output obeys the same shape rules as the frequency extractor.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::traits::KeywordExtractor;
use super::{clean_token, is_candidate, MAX_KEYWORDS};
use crate::summary::split_sentences;

/// TF-IDF based keyword extractor.
#[derive(Debug, Clone)]
pub struct TfIdfExtractor {
    pub max_keywords: usize,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self {
            max_keywords: MAX_KEYWORDS,
        }
    }
}

impl KeywordExtractor for TfIdfExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let token_count = text.split_whitespace().count();
        if token_count == 0 {
            return Vec::new();
        }

        let documents: Vec<String> = split_sentences(text)
            .into_iter()
            .map(str::to_string)
            .collect();
        let stop_words: Vec<String> = get(LANGUAGE::English);

        let params = TfIdfParams::UnprocessedDocuments(&documents, &stop_words, None);
        let tfidf = TfIdf::new(params);
        let mut ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(token_count);

        // Equal scores come back in hash order; sort ties by word so repeated
        // runs agree.
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let limit = self.max_keywords.min(MAX_KEYWORDS);
        let mut keywords: Vec<String> = Vec::new();
        for (word, _) in ranked {
            if keywords.len() >= limit {
                break;
            }
            let cleaned = clean_token(&word);
            if is_candidate(&cleaned) && !keywords.contains(&cleaned) {
                keywords.push(cleaned);
            }
        }

        debug!(
            documents = documents.len(),
            keywords = keywords.len(),
            "Extracted TF-IDF keywords"
        );
        keywords
    }
}
