//! Per-segment correction applied before table lookup.
//!
//! Whole-word overrides run first; a hit replaces the segment and skips the
//! phonetic rules entirely. Otherwise the phonetic rules run in a fixed
//! order, each on the previous rule's output.

mod rules;

use tracing::debug;

use crate::settings::FeatureFlags;
use crate::special_words::SpecialWords;

/// Override for the whole segment, if it is a special word.
pub fn apply_auto_correction<'a>(segment: &str, words: &'a SpecialWords) -> Option<&'a str> {
    words.get(segment)
}

/// Run the phonetic rewrite rules over `segment`.
pub fn apply_smart_correction(segment: &str) -> String {
    let mut word: Vec<char> = segment.chars().collect();
    for (name, rule) in rules::RULES {
        let before = tracing::enabled!(tracing::Level::DEBUG).then(|| word.clone());
        if rule(&mut word) {
            if let Some(before) = before {
                debug!(
                    rule = name,
                    before = %before.iter().collect::<String>(),
                    after = %word.iter().collect::<String>(),
                    "correction applied"
                );
            }
        }
    }
    word.into_iter().collect()
}

/// Full correction for one segment under the current flags.
pub fn correct(segment: &str, words: &SpecialWords, flags: FeatureFlags) -> String {
    if flags.auto_correct {
        if let Some(replacement) = apply_auto_correction(segment, words) {
            debug!(segment, replacement, "special word");
            return replacement.to_string();
        }
    }
    if flags.smart_correction {
        return apply_smart_correction(segment);
    }
    segment.to_string()
}

#[cfg(test)]
mod tests;
