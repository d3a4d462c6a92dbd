// Script classification — which writing systems appear in a text.
//
// Every character is mapped to a script bucket by its code point. The bucket
// table is ordered and first-match-wins; the same order is the canonical
// enumeration used to break ties between buckets with equal counts, so the
// result never depends on the order characters appear in the text.

use serde::Serialize;

/// A writing-system bucket, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Georgian,
    Hangul,
    Ethiopic,
    Cherokee,
    Khmer,
    Mongolian,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Hiragana,
    Katakana,
    Cjk,
}

const SCRIPT_COUNT: usize = 29;

impl Script {
    /// All buckets in canonical order.
    pub const ALL: [Script; SCRIPT_COUNT] = [
        Script::Latin,
        Script::Arabic,
        Script::Devanagari,
        Script::Bengali,
        Script::Gurmukhi,
        Script::Gujarati,
        Script::Oriya,
        Script::Tamil,
        Script::Telugu,
        Script::Kannada,
        Script::Malayalam,
        Script::Sinhala,
        Script::Thai,
        Script::Lao,
        Script::Tibetan,
        Script::Myanmar,
        Script::Georgian,
        Script::Hangul,
        Script::Ethiopic,
        Script::Cherokee,
        Script::Khmer,
        Script::Mongolian,
        Script::Greek,
        Script::Cyrillic,
        Script::Armenian,
        Script::Hebrew,
        Script::Hiragana,
        Script::Katakana,
        Script::Cjk,
    ];

    /// Classify a single character, or `None` if it belongs to no bucket.
    ///
    /// Code points above U+FFFF never match: every range is in the BMP.
    pub fn of(c: char) -> Option<Script> {
        let script = match c {
            '\u{0041}'..='\u{007A}' | '\u{00C0}'..='\u{024F}' => Script::Latin,
            '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}' => Script::Arabic,
            '\u{0900}'..='\u{097F}' => Script::Devanagari,
            '\u{0980}'..='\u{09FF}' => Script::Bengali,
            '\u{0A00}'..='\u{0A7F}' => Script::Gurmukhi,
            '\u{0A80}'..='\u{0AFF}' => Script::Gujarati,
            '\u{0B00}'..='\u{0B7F}' => Script::Oriya,
            '\u{0B80}'..='\u{0BFF}' => Script::Tamil,
            '\u{0C00}'..='\u{0C7F}' => Script::Telugu,
            '\u{0C80}'..='\u{0CFF}' => Script::Kannada,
            '\u{0D00}'..='\u{0D7F}' => Script::Malayalam,
            '\u{0D80}'..='\u{0DFF}' => Script::Sinhala,
            '\u{0E00}'..='\u{0E7F}' => Script::Thai,
            '\u{0E80}'..='\u{0EFF}' => Script::Lao,
            '\u{0F00}'..='\u{0FFF}' => Script::Tibetan,
            '\u{1000}'..='\u{109F}' => Script::Myanmar,
            '\u{10A0}'..='\u{10FF}' => Script::Georgian,
            // Hangul syllables, Jamo, compatibility Jamo
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => {
                Script::Hangul
            }
            '\u{1200}'..='\u{137F}' => Script::Ethiopic,
            '\u{13A0}'..='\u{13FF}' => Script::Cherokee,
            '\u{1780}'..='\u{17FF}' => Script::Khmer,
            '\u{1800}'..='\u{18AF}' => Script::Mongolian,
            '\u{0370}'..='\u{03FF}' => Script::Greek,
            '\u{0400}'..='\u{04FF}' => Script::Cyrillic,
            '\u{0530}'..='\u{058F}' => Script::Armenian,
            '\u{0590}'..='\u{05FF}' => Script::Hebrew,
            '\u{3040}'..='\u{309F}' => Script::Hiragana,
            '\u{30A0}'..='\u{30FF}' => Script::Katakana,
            // CJK Unified Ideographs + Extension A
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' => Script::Cjk,
            _ => return None,
        };
        Some(script)
    }

    /// Stable lowercase name, used in logs and CLI listings.
    pub fn name(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Arabic => "arabic",
            Script::Devanagari => "devanagari",
            Script::Bengali => "bengali",
            Script::Gurmukhi => "gurmukhi",
            Script::Gujarati => "gujarati",
            Script::Oriya => "oriya",
            Script::Tamil => "tamil",
            Script::Telugu => "telugu",
            Script::Kannada => "kannada",
            Script::Malayalam => "malayalam",
            Script::Sinhala => "sinhala",
            Script::Thai => "thai",
            Script::Lao => "lao",
            Script::Tibetan => "tibetan",
            Script::Myanmar => "myanmar",
            Script::Georgian => "georgian",
            Script::Hangul => "hangul",
            Script::Ethiopic => "ethiopic",
            Script::Cherokee => "cherokee",
            Script::Khmer => "khmer",
            Script::Mongolian => "mongolian",
            Script::Greek => "greek",
            Script::Cyrillic => "cyrillic",
            Script::Armenian => "armenian",
            Script::Hebrew => "hebrew",
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
            Script::Cjk => "cjk",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-bucket character counts for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    counts: [usize; SCRIPT_COUNT],
}

impl ScriptCounts {
    pub fn get(&self, script: Script) -> usize {
        self.counts[script.index()]
    }

    pub fn increment(&mut self, script: Script) {
        self.counts[script.index()] += 1;
    }

    /// Total number of classified characters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero buckets in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Script, usize)> + '_ {
        Script::ALL
            .iter()
            .map(|&s| (s, self.get(s)))
            .filter(|&(_, n)| n > 0)
    }

    /// The bucket with the strictly largest count.
    ///
    /// Ties go to the bucket that comes first in canonical order.
    pub fn dominant(&self) -> Option<(Script, usize)> {
        let mut best: Option<(Script, usize)> = None;
        for (script, count) in self.iter() {
            match best {
                Some((_, max)) if count <= max => {}
                _ => best = Some((script, count)),
            }
        }
        best
    }
}

/// Digits, common punctuation, brackets and quotes are stripped before
/// classification.
fn is_stripped(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(
            c,
            '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' | '\'' | '"'
        )
}

/// Count the script buckets of every character in `text`.
///
/// Plain and non-breaking spaces are skipped; characters outside every
/// bucket (other whitespace, symbols, emoji) contribute nothing.
pub fn classify(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();
    for c in text.chars().filter(|&c| !is_stripped(c)) {
        if c == ' ' || c == '\u{00A0}' {
            continue;
        }
        if let Some(script) = Script::of(c) {
            counts.increment(script);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_discriminant_order() {
        for (i, script) in Script::ALL.iter().enumerate() {
            assert_eq!(script.index(), i, "{script} out of canonical order");
        }
    }

    #[test]
    fn test_classify_mixed() {
        let counts = classify("Hi мир");
        assert_eq!(counts.get(Script::Latin), 2);
        assert_eq!(counts.get(Script::Cyrillic), 3);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_digits_and_punctuation_are_ignored() {
        let counts = classify("123 (4.5), [6]! \"7\"");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_ascii_symbols_inside_latin_range_count() {
        // ^ _ ` fall between 'Z' and 'a' and are inside the Latin range
        let counts = classify("^_`");
        assert_eq!(counts.get(Script::Latin), 3);
    }

    #[test]
    fn test_astral_characters_ignored() {
        let counts = classify("😀𠀀");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_dominant_tie_uses_canonical_order() {
        // Greek comes before Cyrillic in the table even though it appears
        // second in the text.
        let counts = classify("жα");
        assert_eq!(counts.dominant(), Some((Script::Greek, 1)));
    }

    #[test]
    fn test_dominant_empty() {
        assert_eq!(ScriptCounts::default().dominant(), None);
    }
}
