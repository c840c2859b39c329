use super::*;

fn words() -> SpecialWords {
    [("pani", "पनि"), ("nepal", "नेपाल")].into_iter().collect()
}

fn flags(auto_correct: bool, smart_correction: bool) -> FeatureFlags {
    FeatureFlags {
        auto_correct,
        smart_correction,
        ..FeatureFlags::default()
    }
}

#[test]
fn test_smart_correction_scenarios() {
    assert_eq!(apply_smart_correction("pani"), "panee");
    assert_eq!(apply_smart_correction("ank"), "angk");
    assert_eq!(apply_smart_correction("ghanTa"), "ghaNTa");
    assert_eq!(apply_smart_correction("kanchan"), "kaञ्chan");
    assert_eq!(apply_smart_correction("aama"), "aamaa");
}

#[test]
fn test_rules_feed_each_other() {
    // velar_nasal already doubles the g, leaving nothing for ng_gemination
    assert_eq!(apply_smart_correction("sanga"), "sangga");
    // final_y, then nasal_assimilation
    assert_eq!(apply_smart_correction("gunDy"), "guNDee");
}

#[test]
fn test_short_segments_skip_ending_rules() {
    assert_eq!(apply_smart_correction("ki"), "ki");
    assert_eq!(apply_smart_correction("ama"), "ama");
    assert_eq!(apply_smart_correction(""), "");
}

#[test]
fn test_auto_correct_skips_smart_rules() {
    let w = words();
    assert_eq!(correct("pani", &w, flags(true, true)), "पनि");
    assert_eq!(correct("nepal", &w, flags(true, false)), "नेपाल");
}

#[test]
fn test_auto_correct_disabled() {
    let w = words();
    assert_eq!(correct("pani", &w, flags(false, true)), "panee");
}

#[test]
fn test_all_correction_disabled() {
    let w = words();
    assert_eq!(correct("pani", &w, flags(false, false)), "pani");
    assert_eq!(correct("ank", &w, flags(false, false)), "ank");
}

#[test]
fn test_auto_correction_lookup() {
    let w = words();
    assert_eq!(apply_auto_correction("nepal", &w), Some("नेपाल"));
    assert_eq!(apply_auto_correction("Nepal", &w), None);
}
