use super::*;

#[test]
fn test_indic_numbers_toggle() {
    let mut t = engine();
    assert_eq!(t.transliterate("ka5"), "क५");
    assert_eq!(t.transliterate("123"), "१२३");
    assert_eq!(t.transliterate("7"), "७");

    t.set_indic_numbers(false);
    assert_eq!(t.transliterate("ka5"), "क5");
    assert_eq!(t.transliterate("123"), "123");
    assert_eq!(t.transliterate("ram 7 shyam"), "रम 7 श्यम");
}

#[test]
fn test_symbol_toggle() {
    let mut t = engine();
    assert_eq!(t.transliterate("."), "।");

    t.set_symbol_transliteration(false);
    assert_eq!(t.transliterate("."), ".");
    assert_eq!(t.transliterate("ram."), "रम .");
    assert_eq!(t.transliterate("|"), "|");
}

#[test]
fn test_smart_correction_toggle() {
    let mut t = engine();
    t.set_smart_correction(false);
    assert_eq!(t.transliterate("pani"), "पनि");
    assert_eq!(t.transliterate("aama"), "आम");
}

#[test]
fn test_flags_read_per_call() {
    let mut t = Transliterator::with_defaults();
    assert_eq!(t.transliterate("pani"), "पनि");
    t.set_auto_correct(false);
    assert_eq!(t.transliterate("pani"), "पनी");
    t.set_auto_correct(true);
    assert_eq!(t.transliterate("pani"), "पनि");
}

#[test]
fn test_set_flags_round_trip() {
    let mut t = engine();
    let flags = FeatureFlags {
        smart_correction: false,
        auto_correct: true,
        indic_numbers: false,
        symbol_transliteration: true,
    };
    t.set_flags(flags);
    assert_eq!(t.flags(), flags);
    assert!(Transliterator::default().flags().auto_correct);
}
