//! Character-level Unicode classification for Devanagari text.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Virama. Suppresses the inherent vowel of the preceding consonant.
pub const HALANT: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';
pub const AVAGRAHA: char = '\u{093D}';
pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';

/// Standard consonants (U+0915..U+0939) and the precomposed nukta forms
/// (U+0958..U+095F).
pub fn is_consonant(c: char) -> bool {
    ('\u{0915}'..='\u{0939}').contains(&c) || ('\u{0958}'..='\u{095F}').contains(&c)
}

pub fn is_halant(c: char) -> bool {
    c == HALANT
}

pub fn is_nukta(c: char) -> bool {
    c == NUKTA
}

/// Matras, including the vocalic L signs.
pub fn is_dependent_vowel_sign(c: char) -> bool {
    ('\u{093E}'..='\u{094C}').contains(&c) || ('\u{0962}'..='\u{0963}').contains(&c)
}

pub fn is_independent_vowel(c: char) -> bool {
    ('\u{0904}'..='\u{0914}').contains(&c)
}

/// Chandrabindu, anusvara and visarga.
pub fn is_modifier(c: char) -> bool {
    ('\u{0901}'..='\u{0903}').contains(&c)
}

pub fn is_avagraha(c: char) -> bool {
    c == AVAGRAHA
}

pub fn is_joiner(c: char) -> bool {
    c == ZWJ || c == ZWNJ
}

/// Devanagari digits only; ASCII digits fall outside the allowed block.
pub fn is_devanagari_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

/// Danda, double danda, or anything in a Unicode punctuation category.
pub fn is_danda_or_punctuation(c: char) -> bool {
    if c == '\u{0964}' || c == '\u{0965}' {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Devanagari (U+0900..U+097F), Devanagari Extended (U+A8E0..U+A8FF), or a
/// joiner.
pub fn is_allowed(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c) || ('\u{A8E0}'..='\u{A8FF}').contains(&c) || is_joiner(c)
}

/// Orthographic role of a code point, as seen by the word validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Consonant,
    IndependentVowel,
    Halant,
    Nukta,
    Matra,
    Modifier,
    Avagraha,
    Joiner,
    /// Outside the allowed blocks, a digit, punctuation, or an allowed code
    /// point with no orthographic role (e.g. ॐ).
    Rejected,
}

pub fn classify(c: char) -> CharClass {
    if !is_allowed(c) || is_devanagari_digit(c) || is_danda_or_punctuation(c) {
        return CharClass::Rejected;
    }
    if is_consonant(c) {
        CharClass::Consonant
    } else if is_independent_vowel(c) {
        CharClass::IndependentVowel
    } else if is_halant(c) {
        CharClass::Halant
    } else if is_nukta(c) {
        CharClass::Nukta
    } else if is_dependent_vowel_sign(c) {
        CharClass::Matra
    } else if is_modifier(c) {
        CharClass::Modifier
    } else if is_avagraha(c) {
        CharClass::Avagraha
    } else if is_joiner(c) {
        CharClass::Joiner
    } else {
        CharClass::Rejected
    }
}
