// Latin-alphabet disambiguation — stopword frequency scoring.
//
// Each supported language has a short list of common function words. A
// language scores one point for every whole-word occurrence of each of its
// words. Word boundaries are ASCII (regex-lite's `\b`), so a marker word that
// ends in an accented letter only matches when followed by an ASCII word
// character.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Label used when no Latin language scores above zero.
pub const ENGLISH: &str = "English";

/// A Latin-script language with its marker words.
pub struct LatinLanguage {
    /// English name of the language
    pub name: &'static str,
    /// Display label with the native-script name in parentheses
    pub display: &'static str,
    pub words: &'static [&'static str],
}

/// Supported languages, in tie-break order.
pub static LATIN_LANGUAGES: &[LatinLanguage] = &[
    LatinLanguage {
        name: "Spanish",
        display: "Spanish (Español)",
        words: &[
            "el", "la", "de", "que", "y", "es", "en", "los", "se", "por", "con", "para", "una",
            "está", "como", "su", "al",
        ],
    },
    LatinLanguage {
        name: "French",
        display: "French (Français)",
        words: &[
            "le", "de", "un", "et", "être", "à", "il", "avoir", "ne", "je", "son", "que", "se",
            "qui", "ce", "dans", "en", "du", "elle", "au", "pour", "pas", "sur",
        ],
    },
    LatinLanguage {
        name: "German",
        display: "German (Deutsch)",
        words: &[
            "der", "die", "und", "in", "den", "von", "zu", "das", "mit", "sich", "des", "auf",
            "für", "ist", "im", "dem", "nicht", "ein", "eine", "als", "auch", "es", "an",
            "werden", "aus",
        ],
    },
    LatinLanguage {
        name: "Italian",
        display: "Italian (Italiano)",
        words: &[
            "il", "di", "che", "è", "la", "per", "un", "non", "in", "sono", "mi", "ho", "lo",
            "ma", "del", "della", "una", "dei", "delle",
        ],
    },
    LatinLanguage {
        name: "Portuguese",
        display: "Portuguese (Português)",
        words: &[
            "o", "de", "que", "e", "a", "do", "da", "em", "um", "para", "é", "com", "não", "uma",
            "os", "no", "se", "na", "por", "mais", "as", "dos", "como",
        ],
    },
    LatinLanguage {
        name: "Dutch",
        display: "Dutch (Nederlands)",
        words: &[
            "de", "het", "een", "van", "in", "en", "is", "op", "te", "dat", "voor", "met", "zijn",
            "die", "aan", "er", "niet", "om",
        ],
    },
    LatinLanguage {
        name: "Swedish",
        display: "Swedish (Svenska)",
        words: &[
            "och", "i", "att", "det", "som", "en", "på", "är", "av", "för", "den", "till", "har",
            "de", "med", "var",
        ],
    },
    LatinLanguage {
        name: "Norwegian",
        display: "Norwegian (Norsk)",
        words: &[
            "og", "i", "det", "er", "en", "til", "som", "på", "for", "med", "av", "har", "de",
            "at", "den",
        ],
    },
    LatinLanguage {
        name: "Danish",
        display: "Danish (Dansk)",
        words: &[
            "og", "i", "det", "at", "en", "er", "til", "som", "på", "de", "med", "for", "den",
            "af", "har",
        ],
    },
    LatinLanguage {
        name: "Polish",
        display: "Polish (Polski)",
        words: &[
            "w", "i", "na", "z", "o", "do", "nie", "się", "to", "że", "jest", "po", "ze", "od",
            "dla", "oraz",
        ],
    },
    LatinLanguage {
        name: "Turkish",
        display: "Turkish (Türkçe)",
        words: &[
            "bir", "ve", "bu", "da", "ile", "için", "mi", "ne", "var", "daha", "çok", "o",
            "kadar", "de", "ben",
        ],
    },
    LatinLanguage {
        name: "Indonesian",
        display: "Indonesian (Bahasa Indonesia)",
        words: &[
            "yang", "dan", "di", "ini", "itu", "untuk", "dengan", "pada", "adalah", "dari", "ke",
            "akan", "oleh", "telah",
        ],
    },
    LatinLanguage {
        name: "Malay",
        display: "Malay (Bahasa Melayu)",
        words: &[
            "yang", "dan", "di", "ini", "itu", "untuk", "dengan", "pada", "adalah", "daripada",
            "ke", "akan", "oleh", "telah",
        ],
    },
    LatinLanguage {
        name: "Vietnamese",
        display: "Vietnamese (Tiếng Việt)",
        words: &[
            "và", "của", "có", "là", "trong", "được", "các", "để", "cho", "một", "với", "không",
            "đã", "này",
        ],
    },
    LatinLanguage {
        name: "Tagalog",
        display: "Tagalog (Filipino)",
        words: &[
            "ang", "ng", "sa", "na", "ay", "mga", "at", "para", "ito", "ko", "mo", "ako", "siya",
        ],
    },
    LatinLanguage {
        name: "Swahili",
        display: "Swahili (Kiswahili)",
        words: &["na", "ya", "wa", "kwa", "ni", "la", "katika", "kama", "au", "cha", "za"],
    },
    LatinLanguage {
        name: "Romanian",
        display: "Romanian (Română)",
        words: &[
            "și", "de", "cu", "la", "în", "pe", "pentru", "ca", "cel", "din", "este", "care",
            "să", "mai", "ce",
        ],
    },
    LatinLanguage {
        name: "Czech",
        display: "Czech (Čeština)",
        words: &[
            "a", "v", "se", "na", "je", "to", "z", "o", "s", "do", "pro", "za", "po", "že", "k",
        ],
    },
    LatinLanguage {
        name: "Finnish",
        display: "Finnish (Suomi)",
        words: &[
            "ja", "on", "ei", "se", "että", "oli", "olla", "hän", "kuin", "kun", "voi", "niin",
            "tämä",
        ],
    },
    LatinLanguage {
        name: "Hungarian",
        display: "Hungarian (Magyar)",
        words: &[
            "a", "az", "és", "van", "hogy", "nem", "is", "meg", "egy", "mint", "ez", "el", "volt",
        ],
    },
];

/// Whole-word patterns, compiled once, parallel to `LATIN_LANGUAGES`.
static WORD_PATTERNS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    LATIN_LANGUAGES
        .iter()
        .map(|lang| {
            lang.words
                .iter()
                .map(|word| {
                    Regex::new(&format!(r"\b{}\b", regex_lite::escape(word)))
                        .expect("escaped marker word is a valid pattern")
                })
                .collect()
        })
        .collect()
});

/// Per-language scores for lower-cased text, in tie-break order.
pub fn score_latin(lower: &str) -> Vec<(&'static LatinLanguage, usize)> {
    LATIN_LANGUAGES
        .iter()
        .zip(WORD_PATTERNS.iter())
        .map(|(lang, patterns)| {
            let score: usize = patterns.iter().map(|re| re.find_iter(lower).count()).sum();
            (lang, score)
        })
        .collect()
}

/// Pick a Latin-script language label for lower-cased text.
///
/// The strictly highest score wins; among equal scores the language listed
/// first wins. A text with no marker words at all is English.
pub fn detect_latin(lower: &str) -> &'static str {
    let mut best: Option<(&'static LatinLanguage, usize)> = None;
    for (lang, score) in score_latin(lower) {
        match best {
            Some((_, max)) if score <= max => {}
            _ if score == 0 => {}
            _ => best = Some((lang, score)),
        }
    }
    best.map(|(lang, _)| lang.display).unwrap_or(ENGLISH)
}
