//! The phonetic rewrite rules, applied in declaration order.
//!
//! Each rule edits the segment in place and reports whether it changed
//! anything. Rules see the output of every rule before them.

use crate::unicode::HALANT;

pub(crate) type Rule = fn(&mut Vec<char>) -> bool;

/// Ordered rule table. Order is significant.
pub(crate) const RULES: [(&str, Rule); 6] = [
    ("final_y", final_y),
    ("schwa", schwa),
    ("final_i", final_i),
    ("velar_nasal", velar_nasal),
    ("ng_gemination", ng_gemination),
    ("nasal_assimilation", nasal_assimilation),
];

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Last four chars, lowercased, last first. Only defined for words longer
/// than three chars.
fn ending(word: &[char]) -> Option<[char; 4]> {
    let n = word.len();
    if n <= 3 {
        return None;
    }
    Some([
        lower(word[n - 1]),
        lower(word[n - 2]),
        lower(word[n - 3]),
        lower(word[n - 4]),
    ])
}

fn replace_last_with_ee(word: &mut Vec<char>) {
    word.pop();
    word.extend(['e', 'e']);
}

/// `gunDy` → `gunDee`.
fn final_y(word: &mut Vec<char>) -> bool {
    match ending(word) {
        Some([e0, ..]) if e0 == 'y' => {
            replace_last_with_ee(word);
            true
        }
        _ => false,
    }
}

/// Endings where the final `a` stays short.
fn is_schwa_exception([e0, e1, e2, e3]: [char; 4]) -> bool {
    (e0 == 'a' && e1 == 'h' && e2 == 'h')
        || (e0 == 'a' && e1 == 'n' && matches!(e2, 'k' | 'h' | 'r'))
        || (e0 == 'a' && e1 == 'r' && matches!((e2, e3), ('d', 'n') | ('t', 'n')))
}

/// Lengthen a final `a` after `m` or after a simple consonant ending:
/// `aama` → `aamaa`.
fn schwa(word: &mut Vec<char>) -> bool {
    let Some(end) = ending(word) else {
        return false;
    };
    if is_schwa_exception(end) {
        return false;
    }
    let [e0, e1, e2, e3] = end;
    let lengthen =
        e0 == 'a' && (e1 == 'm' || (!is_vowel(e1) && !is_vowel(e3) && e1 != 'y' && e2 != 'e'));
    if lengthen {
        word.push('a');
    }
    lengthen
}

/// `pani` → `panee`, but never `rri`.
fn final_i(word: &mut Vec<char>) -> bool {
    match ending(word) {
        Some([e0, e1, e2, _]) if e0 == 'i' && !is_vowel(e1) && !(e1 == 'r' && e2 == 'r') => {
            replace_last_with_ee(word);
            true
        }
        _ => false,
    }
}

/// `n` before `k`/`g` is the velar nasal: `ank` → `angk`.
fn velar_nasal(word: &mut Vec<char>) -> bool {
    let mut changed = false;
    let mut i = 1;
    while i + 1 < word.len() {
        if lower(word[i]) == 'n' && matches!(lower(word[i + 1]), 'k' | 'g') {
            word[i] = 'n';
            word.insert(i + 1, 'g');
            i += 1;
            changed = true;
        }
        i += 1;
    }
    changed
}

fn find_ng(word: &[char], from: usize) -> Option<usize> {
    word.get(from..)?
        .windows(2)
        .position(|w| w == ['n', 'g'])
        .map(|p| p + from)
}

/// `ng` followed by a vowel doubles the `g`, away from the word start.
fn ng_gemination(word: &mut Vec<char>) -> bool {
    let mut changed = false;
    let mut next = find_ng(word, 0);
    while let Some(p) = next {
        if p >= 2 && p + 2 < word.len() && is_vowel(word[p + 2]) {
            word.insert(p + 2, 'g');
            changed = true;
            next = find_ng(word, p + 3);
        } else {
            next = find_ng(word, p + 1);
        }
    }
    changed
}

/// Case-sensitive. `nT`/`nD` → `NT`/`ND`; `nch` (not `nchh`) takes the
/// palatal nasal ञ् directly.
fn nasal_assimilation(word: &mut Vec<char>) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 1 < word.len() {
        if word[i] == 'n' {
            let next = word[i + 1];
            if next == 'T' || next == 'D' {
                word[i] = 'N';
                i += 1;
                changed = true;
            } else if next == 'c'
                && word.get(i + 2) == Some(&'h')
                && word.get(i + 3) != Some(&'h')
            {
                word[i] = 'ञ';
                word.insert(i + 1, HALANT);
                i += 1;
                changed = true;
            }
        }
        i += 1;
    }
    changed
}
