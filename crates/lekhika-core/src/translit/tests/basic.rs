use super::*;

#[test]
fn test_common_words() {
    let t = engine();
    assert_eq!(t.transliterate("namaste"), "नमस्ते");
    assert_eq!(t.transliterate("ram"), "रम");
    assert_eq!(t.transliterate("aama"), "आमा");
    assert_eq!(t.transliterate("kri"), "क्रि");
}

#[test]
fn test_smart_correction_reaches_output() {
    let t = engine();
    assert_eq!(t.transliterate("pani"), "पनी");
    assert_eq!(t.transliterate("ank"), "अङ्क");
    assert_eq!(t.transliterate("ghanTa"), "घण्ट");
    assert_eq!(t.transliterate("kanchan"), "कञ्चन");
}

#[test]
fn test_single_char_keeps_halant() {
    let t = engine();
    assert_eq!(t.transliterate("k"), "क्");
    assert_eq!(t.transliterate("kk"), "क्क");
}

#[test]
fn test_explicit_halant_marker() {
    let t = engine();
    let out = t.transliterate("ka\\");
    assert_eq!(out, "क्");
    assert!(!out.contains('\\'));
    assert_eq!(t.transliterate("ka\\ta"), "क्त");
    assert_eq!(t.transliterate("ka\\."), "क् ।");
}

#[test]
fn test_duplicate_consonant_last_wins() {
    let t = Transliterator::from_sources("[consonantMap]\nva = \"व\"\nva = \"ब\"\n", "");
    assert_eq!(t.transliterate("va"), "ब");
    assert_eq!(t.transliterate("vi"), "बि");
}

#[test]
fn test_segments_rejoined_with_single_space() {
    let t = engine();
    assert_eq!(t.transliterate("  ram   shyam "), "रम श्यम");
}

#[test]
fn test_punctuation_split_off() {
    let t = engine();
    assert_eq!(t.transliterate("ram."), "रम ।");
    assert_eq!(t.transliterate("ram|"), "रम ।");
}

#[test]
fn test_empty_and_blank() {
    let t = engine();
    assert_eq!(t.transliterate(""), "");
    assert_eq!(t.transliterate("   "), "");
}

#[test]
fn test_longest_match_precedence() {
    let t = Transliterator::from_sources("[charMap]\nk = \"K\"\nka = \"KA\"\n", "");
    assert_eq!(t.transliterate("ka"), "KA");
    assert_eq!(t.transliterate("kk"), "KK");
}

#[test]
fn test_explicit_entry_beats_derived() {
    let t = Transliterator::from_sources(
        "[charMap]\nki = \"X\"\n[consonantMap]\nka = \"क\"\n",
        "",
    );
    assert_eq!(t.transliterate("ki"), "X");
    assert_eq!(t.transliterate("ku"), "कु");
}

#[test]
fn test_auto_correct_whole_word() {
    let t = Transliterator::with_defaults();
    assert_eq!(t.transliterate("nepal"), "नेपाल");
    assert_eq!(t.transliterate("pani"), "पनि");
    assert_eq!(t.transliterate("nepal pani"), "नेपाल पनि");
}

#[test]
fn test_unmapped_passes_through() {
    let t = engine();
    assert_eq!(t.transliterate("नेपाल"), "नेपाल");
    assert_eq!(t.transliterate("@"), "@");
}
