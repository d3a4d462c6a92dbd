// Script counts -> language label.
//
// Japanese, Korean and Chinese are checked before anything else because their
// scripts co-occur: Japanese text mixes kana with CJK ideographs, so kana
// anywhere means Japanese regardless of how many ideographs there are.

use tracing::debug;

use super::cyrillic::detect_cyrillic;
use super::latin::detect_latin;
use super::script::{classify, Script, ScriptCounts};

/// Label for text with no classifiable characters.
pub const UNKNOWN: &str = "Unknown";

pub const JAPANESE: &str = "Japanese (日本語)";
pub const KOREAN: &str = "Korean (한국어)";
pub const CHINESE: &str = "Chinese (中文)";

/// Label for a script that belongs to exactly one language; `None` for
/// Latin and Cyrillic, which need disambiguation.
pub fn script_label(script: Script) -> Option<&'static str> {
    let label = match script {
        Script::Arabic => "Arabic (العربية)",
        Script::Devanagari => "Hindi (हिन्दी)",
        Script::Bengali => "Bengali (বাংলা)",
        Script::Gurmukhi => "Punjabi (ਪੰਜਾਬੀ)",
        Script::Gujarati => "Gujarati (ગુજરાતી)",
        Script::Oriya => "Odia (ଓଡ଼ିଆ)",
        Script::Tamil => "Tamil (தமிழ்)",
        Script::Telugu => "Telugu (తెలుగు)",
        Script::Kannada => "Kannada (ಕನ್ನಡ)",
        Script::Malayalam => "Malayalam (മലയാളം)",
        Script::Sinhala => "Sinhala (සිංහල)",
        Script::Thai => "Thai (ไทย)",
        Script::Lao => "Lao (ລາວ)",
        Script::Tibetan => "Tibetan (བོད་ཡིག)",
        Script::Myanmar => "Burmese (မြန်မာဘာသာ)",
        Script::Georgian => "Georgian (ქართული)",
        Script::Ethiopic => "Amharic (አማርኛ)",
        Script::Cherokee => "Cherokee (ᏣᎳᎩ)",
        Script::Khmer => "Khmer (ខ្មែរ)",
        Script::Mongolian => "Mongolian (Монгол)",
        Script::Greek => "Greek (Ελληνικά)",
        Script::Armenian => "Armenian (Հայերեն)",
        Script::Hebrew => "Hebrew (עברית)",
        Script::Hangul => KOREAN,
        Script::Hiragana | Script::Katakana => JAPANESE,
        Script::Cjk => CHINESE,
        Script::Latin | Script::Cyrillic => return None,
    };
    Some(label)
}

/// Resolve a language label from script counts.
///
/// `lower` is the lower-cased original text, used by the Latin and Cyrillic
/// disambiguators.
pub fn resolve_language(counts: &ScriptCounts, lower: &str) -> String {
    if counts.get(Script::Hiragana) > 0 || counts.get(Script::Katakana) > 0 {
        return JAPANESE.to_string();
    }
    if counts.get(Script::Hangul) > 0 {
        return KOREAN.to_string();
    }
    if counts.get(Script::Cjk) > 0 {
        return CHINESE.to_string();
    }

    let Some((script, count)) = counts.dominant() else {
        return UNKNOWN.to_string();
    };
    debug!(script = script.name(), count, "Dominant script");

    let label = match script {
        Script::Cyrillic => detect_cyrillic(lower),
        Script::Latin => detect_latin(lower),
        other => script_label(other).unwrap_or(UNKNOWN),
    };
    label.to_string()
}

/// Best-guess language of `text`, e.g. "Russian (Русский)", "English" or
/// "Unknown".
pub fn detect_language(text: &str) -> String {
    if text.trim().is_empty() {
        return UNKNOWN.to_string();
    }
    let counts = classify(text);
    resolve_language(&counts, &text.to_lowercase())
}
