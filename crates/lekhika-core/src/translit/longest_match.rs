//! Greedy longest-prefix tokenizer over the mapping table.

use crate::mapping::MappingTable;
use crate::settings::FeatureFlags;
use crate::unicode::HALANT;

/// Separates independently matched sub-segments inside one segment.
pub const SUB_SEGMENT_SEPARATOR: char = '/';

/// Marks a dead consonant the user asked for explicitly.
pub const EXPLICIT_HALANT_MARKER: char = '\\';

/// A single char that the current flags send through untouched.
pub(crate) fn bypasses(c: char, flags: FeatureFlags) -> bool {
    (c.is_ascii_digit() && !flags.indic_numbers)
        || (!c.is_ascii_alphanumeric() && !flags.symbol_transliteration)
}

/// Transliterate one (already corrected) segment.
pub fn transliterate_segment(segment: &str, mapping: &MappingTable, flags: FeatureFlags) -> String {
    let mut out = String::with_capacity(segment.len() * 3);
    for sub in segment.split(SUB_SEGMENT_SEPARATOR).filter(|s| !s.is_empty()) {
        let start = out.len();
        match_into(&mut out, sub, mapping, flags);
        if out.len() > start
            && out.ends_with(HALANT)
            && !sub.ends_with(EXPLICIT_HALANT_MARKER)
            && sub.chars().nth(1).is_some()
        {
            out.pop();
        }
    }
    out
}

fn match_into(out: &mut String, latin: &str, mapping: &MappingTable, flags: FeatureFlags) {
    let chars: Vec<char> = latin.chars().collect();
    // Byte offset of every char boundary, so prefixes can be sliced directly.
    let mut bounds: Vec<usize> = latin.char_indices().map(|(i, _)| i).collect();
    bounds.push(latin.len());

    let mut pos = 0;
    let max_len = mapping.max_key_chars().max(1);
    while pos < chars.len() {
        let longest = max_len.min(chars.len() - pos);
        let mut consumed = false;
        for len in (1..=longest).rev() {
            if len == 1 && bypasses(chars[pos], flags) {
                break;
            }
            let prefix = &latin[bounds[pos]..bounds[pos + len]];
            if let Some(value) = mapping.get(prefix) {
                out.push_str(value);
                pos += len;
                consumed = true;
                break;
            }
        }
        if !consumed {
            out.push(chars[pos]);
            pos += 1;
        }
    }
}
