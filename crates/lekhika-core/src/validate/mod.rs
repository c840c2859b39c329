//! Orthographic well-formedness of a Devanagari word.
//!
//! A left-to-right automaton over [`CharClass`]: consonants may be followed by
//! a nukta, a matra, a halant (starting a conjunct), a modifier or an
//! avagraha; a joiner is only meaningful right after a halant. Single-grapheme
//! strings are never words.

use unicode_segmentation::UnicodeSegmentation;

use crate::unicode::{classify, is_danda_or_punctuation, is_joiner, CharClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterConsonant,
    AfterHalant,
    AfterIndependentVowel,
    AfterSyllableWithMatra,
    AfterModifier,
    AfterAvagraha,
}

impl State {
    /// `None` rejects the word.
    fn next(self, class: CharClass) -> Option<State> {
        use CharClass as C;
        use State as S;
        match (self, class) {
            (_, C::Rejected) => None,

            (_, C::Consonant) => Some(S::AfterConsonant),

            (S::Start | S::AfterIndependentVowel | S::AfterModifier, C::IndependentVowel) => {
                Some(S::AfterIndependentVowel)
            }

            (S::AfterConsonant, C::Halant) => Some(S::AfterHalant),
            (S::AfterConsonant, C::Nukta) => Some(S::AfterConsonant),
            (S::AfterConsonant, C::Matra) => Some(S::AfterSyllableWithMatra),

            (
                S::AfterConsonant | S::AfterIndependentVowel | S::AfterSyllableWithMatra,
                C::Modifier,
            ) => Some(S::AfterModifier),

            (
                S::AfterConsonant
                | S::AfterIndependentVowel
                | S::AfterSyllableWithMatra
                | S::AfterModifier,
                C::Avagraha,
            ) => Some(S::AfterAvagraha),

            // ZWJ/ZWNJ after a halant only hints at ligation.
            (S::AfterHalant, C::Joiner) => Some(S::AfterHalant),

            _ => None,
        }
    }

    fn is_accepting(self) -> bool {
        self != State::Start
    }
}

/// Number of extended grapheme clusters.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

pub fn is_valid_devanagari_word(word: &str) -> bool {
    if word.is_empty() || grapheme_count(word) < 2 {
        return false;
    }

    let mut state = State::Start;
    for c in word.chars() {
        match state.next(classify(c)) {
            Some(next) => state = next,
            None => return false,
        }
    }

    // The automaton stays in AfterHalant on a joiner, so a trailing joiner
    // has to be rejected separately.
    if word.chars().next_back().is_some_and(is_joiner) {
        return false;
    }

    state.is_accepting()
}

/// Remove danda and Unicode punctuation, keep everything else.
pub fn sanitize_devanagari_word(word: &str) -> String {
    word.chars().filter(|&c| !is_danda_or_punctuation(c)).collect()
}
