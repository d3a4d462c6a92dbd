// Cyrillic disambiguation: Russian, Ukrainian or Bulgarian.
//
// Matching is plain substring containment on the lower-cased text, looser than
// the word-boundary matching used for Latin languages. Each listed word adds
// at most one point no matter how often it occurs.

pub const RUSSIAN: &str = "Russian (Русский)";
pub const UKRAINIAN: &str = "Ukrainian (Українська)";
pub const BULGARIAN: &str = "Bulgarian (Български)";

// "это" is listed twice and so counts double.
const RUSSIAN_WORDS: &[&str] = &["это", "как", "что", "или", "для", "его", "был", "она", "это"];
const UKRAINIAN_WORDS: &[&str] = &["це", "або", "його", "був", "вона", "їх", "який"];
const BULGARIAN_WORDS: &[&str] = &["това", "или", "като", "който", "беше"];

/// Marker-word hit counts for the three Cyrillic languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CyrillicScores {
    pub russian: usize,
    pub ukrainian: usize,
    pub bulgarian: usize,
}

fn hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

/// Score lower-cased text against each language's marker words.
pub fn score_cyrillic(lower: &str) -> CyrillicScores {
    CyrillicScores {
        russian: hits(lower, RUSSIAN_WORDS),
        ukrainian: hits(lower, UKRAINIAN_WORDS),
        bulgarian: hits(lower, BULGARIAN_WORDS),
    }
}

/// Pick a Cyrillic language label for lower-cased text.
///
/// Ukrainian or Bulgarian win only by strictly beating both other languages;
/// everything else, including all ties, falls back to Russian.
pub fn detect_cyrillic(lower: &str) -> &'static str {
    let s = score_cyrillic(lower);
    if s.ukrainian > s.russian && s.ukrainian > s.bulgarian {
        UKRAINIAN
    } else if s.bulgarian > s.russian && s.bulgarian > s.ukrainian {
        BULGARIAN
    } else {
        RUSSIAN
    }
}
