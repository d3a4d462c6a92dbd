// Extractive summary: the leading sentences of a document, capped in length.
//
// A sentence is a run of non-terminator characters followed by one or more of
// `.`, `!`, `?`. Trailing text with no terminator is not a sentence, and a
// sentence keeps any leading whitespace it had in the original text.

/// Default number of leading sentences kept.
pub const MAX_SENTENCES: usize = 3;
/// Default character cap before the ellipsis.
pub const MAX_SUMMARY_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into terminated sentences.
///
/// If no sentence is found the whole text is returned as the only sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut terminated = false;

    for (i, c) in text.char_indices() {
        match (start, is_terminal(c)) {
            // Terminators with no sentence body are skipped
            (None, true) => {}
            (None, false) => start = Some(i),
            (Some(_), true) => terminated = true,
            (Some(s), false) if terminated => {
                sentences.push(&text[s..i]);
                start = Some(i);
                terminated = false;
            }
            (Some(_), false) => {}
        }
    }
    if let (Some(s), true) = (start, terminated) {
        sentences.push(&text[s..]);
    }

    if sentences.is_empty() {
        vec![text]
    } else {
        sentences
    }
}

/// Builds a leading-excerpt summary.
#[derive(Debug, Clone)]
pub struct Summarizer {
    pub max_sentences: usize,
    pub max_chars: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            max_sentences: MAX_SENTENCES,
            max_chars: MAX_SUMMARY_CHARS,
        }
    }
}

impl Summarizer {
    /// Join the first sentences with single spaces and cap the length.
    ///
    /// When the capped text reaches `max_chars` characters an ellipsis is
    /// appended, so the result is at most `max_chars + 3` characters.
    pub fn summarize(&self, text: &str) -> String {
        let joined = split_sentences(text)
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(" ");

        let mut summary: String = joined.chars().take(self.max_chars).collect();
        if summary.chars().count() >= self.max_chars {
            summary.push_str(ELLIPSIS);
        }
        summary
    }
}

/// Summarize with the default limits.
pub fn summarize(text: &str) -> String {
    Summarizer::default().summarize(text)
}
