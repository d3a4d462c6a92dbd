// Unit tests for language identification.
//
// Tests isolated pure functions: script classification per bucket,
// the resolver's precedence rules and tie-breaks, and the Latin and
// Cyrillic disambiguators.

use docsense::language::cyrillic::{detect_cyrillic, BULGARIAN, RUSSIAN, UKRAINIAN};
use docsense::language::latin::{detect_latin, score_latin, ENGLISH, LATIN_LANGUAGES};
use docsense::language::resolver::{CHINESE, JAPANESE, KOREAN};
use docsense::language::{classify, detect_language, script_label, Script, UNKNOWN};

// ============================================================
// Single-script inputs resolve to their language
// ============================================================

/// One sample character per directly mapped bucket.
const SINGLE_SCRIPT_SAMPLES: &[(Script, &str)] = &[
    (Script::Arabic, "مرحبا بالعالم"),
    (Script::Devanagari, "नमस्ते"),
    (Script::Bengali, "বাংলা ভাষা"),
    (Script::Gurmukhi, "ਪੰਜਾਬੀ"),
    (Script::Gujarati, "ગુજરાતી"),
    (Script::Oriya, "ଓଡ଼ିଆ"),
    (Script::Tamil, "தமிழ்"),
    (Script::Telugu, "తెలుగు"),
    (Script::Kannada, "ಕನ್ನಡ"),
    (Script::Malayalam, "മലയാളം"),
    (Script::Sinhala, "සිංහල"),
    (Script::Thai, "ภาษาไทย"),
    (Script::Lao, "ພາສາລາວ"),
    (Script::Tibetan, "བོད་ཡིག"),
    (Script::Myanmar, "မြန်မာ"),
    (Script::Georgian, "ქართული"),
    (Script::Ethiopic, "አማርኛ"),
    (Script::Cherokee, "ᏣᎳᎩ"),
    (Script::Khmer, "ខ្មែរ"),
    (Script::Mongolian, "ᠮᠣᠩᠭᠣᠯ"),
    (Script::Greek, "Ελληνικά"),
    (Script::Armenian, "Հայերեն"),
    (Script::Hebrew, "עברית"),
];

#[test]
fn single_script_inputs_resolve_to_their_label() {
    for (script, sample) in SINGLE_SCRIPT_SAMPLES {
        let counts = classify(sample);
        assert_eq!(
            counts.dominant().map(|(s, _)| s),
            Some(*script),
            "{sample} classified as {:?}",
            counts.dominant()
        );
        let expected = script_label(*script).unwrap();
        assert_eq!(detect_language(sample), expected, "sample {sample}");
    }
}

#[test]
fn every_bucket_except_latin_and_cyrillic_has_a_label() {
    for script in Script::ALL {
        let has_label = script_label(script).is_some();
        let shared = matches!(script, Script::Latin | Script::Cyrillic);
        assert_eq!(has_label, !shared, "{script}");
    }
}

#[test]
fn labels_include_native_name() {
    assert_eq!(script_label(Script::Myanmar), Some("Burmese (မြန်မာဘာသာ)"));
    assert_eq!(script_label(Script::Ethiopic), Some("Amharic (አማርኛ)"));
    assert_eq!(script_label(Script::Gurmukhi), Some("Punjabi (ਪੰਜਾਬੀ)"));
}

// ============================================================
// East Asian precedence
// ============================================================

#[test]
fn kana_with_many_ideographs_is_japanese() {
    // One katakana among many ideographs
    let text = format!("{}ア", "漢".repeat(50));
    assert_eq!(detect_language(&text), JAPANESE);
    assert_eq!(detect_language("ひらがな"), JAPANESE);
}

#[test]
fn hangul_jamo_blocks_count_as_korean() {
    assert_eq!(detect_language("ㄱㄴㄷ"), KOREAN);
    assert_eq!(detect_language("\u{1100}\u{1161}"), KOREAN);
}

#[test]
fn ideographs_alone_are_chinese() {
    assert_eq!(detect_language("中文文本"), CHINESE);
    // Extension A
    assert_eq!(detect_language("\u{3400}"), CHINESE);
}

#[test]
fn ideographs_beat_a_latin_majority() {
    assert_eq!(detect_language("This sentence mentions 北京 once"), CHINESE);
}

// ============================================================
// Unknown and edge inputs
// ============================================================

#[test]
fn unrecognized_scripts_are_unknown() {
    assert_eq!(detect_language("😀 🎉 ✓"), UNKNOWN);
    assert_eq!(detect_language("!!! ... ???"), UNKNOWN);
}

#[test]
fn non_breaking_spaces_are_skipped() {
    let counts = classify("\u{00A0}\u{00A0}a");
    assert_eq!(counts.total(), 1);
}

#[test]
fn accented_latin_counts_as_latin() {
    let counts = classify("ÀÉÎõüÿ");
    assert_eq!(counts.get(Script::Latin), 6);
}

// ============================================================
// Latin disambiguation
// ============================================================

#[test]
fn latin_examples() {
    let cases = [
        ("il gatto non è sul tavolo della cucina", "Italian (Italiano)"),
        ("o gato não está em cima da mesa com os outros", "Portuguese (Português)"),
        ("het is een mooie dag voor een wandeling", "Dutch (Nederlands)"),
        ("och det är en fin dag att gå ut", "Swedish (Svenska)"),
        ("w domu jest kot i pies oraz ptak", "Polish (Polski)"),
        ("bu bir kitap ve çok güzel", "Turkish (Türkçe)"),
        ("ang bata ay naglalaro sa parke kasama ang mga kaibigan", "Tagalog (Filipino)"),
        ("hän on kotona ja se on hyvä", "Finnish (Suomi)"),
        ("az alma piros és nem zöld", "Hungarian (Magyar)"),
    ];
    for (text, expected) in cases {
        assert_eq!(detect_latin(text), expected, "text: {text}");
    }
}

#[test]
fn latin_scores_follow_list_order() {
    let scores = score_latin("anything");
    let names: Vec<&str> = scores.iter().map(|(l, _)| l.name).collect();
    let expected: Vec<&str> = LATIN_LANGUAGES.iter().map(|l| l.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn latin_zero_score_is_english() {
    assert_eq!(detect_latin(""), ENGLISH);
    assert_eq!(detect_language("Hello world"), ENGLISH);
}

#[test]
fn latin_matching_uses_lowercased_text() {
    // detect_language lower-cases before disambiguating
    assert_eq!(detect_language("DER HUND UND DIE KATZE"), "German (Deutsch)");
}

// ============================================================
// Cyrillic disambiguation
// ============================================================

#[test]
fn cyrillic_labels() {
    assert_eq!(detect_cyrillic("вона це зробила"), UKRAINIAN);
    assert_eq!(detect_cyrillic("това е книга, която беше тук"), BULGARIAN);
    assert_eq!(detect_cyrillic("как дела"), RUSSIAN);
}

#[test]
fn cyrillic_ties_default_to_russian() {
    // "или" is both a Russian and a Bulgarian marker: 1-0-1
    assert_eq!(detect_cyrillic("или"), RUSSIAN);
}

#[test]
fn russian_scenario() {
    assert_eq!(detect_language("Это хорошо и прекрасно"), RUSSIAN);
}
