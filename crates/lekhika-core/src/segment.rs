//! Input segmentation: boundary insertion before punctuation and `{...}`
//! literal masking.
//!
//! Literal spans are swapped out for numbered mask tokens (`$-1-$`, `$-2-$`,
//! ...) before the text is split on spaces, so a span containing spaces or
//! mapped characters survives as a single opaque token. After transliteration
//! each mask is located in the output *in its transliterated form* and
//! replaced with the original text.

use crate::mapping::MappingTable;
use crate::translit::EXPLICIT_HALANT_MARKER;

/// Symbols copied verbatim that never trigger a boundary. The explicit
/// halant marker belongs to the consonant before it.
pub const PASS_THROUGH_SYMBOLS: &[char] = &['*', EXPLICIT_HALANT_MARKER];

pub const LITERAL_OPEN: char = '{';
pub const LITERAL_CLOSE: char = '}';

/// Insert a space before punctuation-like characters that would otherwise
/// merge into the preceding token.
///
/// A space is inserted before `c` when `c` is not ASCII alphanumeric, is
/// `.`/`?` or a single-character mapping key, and the previous input
/// character is not a space. Text inside `{...}` is copied untouched, and
/// `{` itself never takes a boundary even if it is a mapping key.
pub fn preprocess_input(text: &str, mapping: &MappingTable) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut prev: Option<char> = None;
    let mut in_literal = false;

    for c in text.chars() {
        if in_literal {
            in_literal = c != LITERAL_CLOSE;
        } else if c == LITERAL_OPEN {
            in_literal = true;
        } else if !PASS_THROUGH_SYMBOLS.contains(&c) && needs_boundary(c, prev, mapping) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn needs_boundary(c: char, prev: Option<char>, mapping: &MappingTable) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    prev != ' '
        && !c.is_ascii_alphanumeric()
        && (c == '.' || c == '?' || mapping.contains_char(c))
}

/// The `n`-th mask token (1-based).
pub fn mask_token(n: usize) -> String {
    format!("$-{n}-$")
}

/// Text with its literal spans replaced by mask tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    text: String,
    /// (mask token, original inner text), in order of appearance.
    literals: Vec<(String, String)>,
}

impl MaskedText {
    /// Non-empty space-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ').filter(|s| !s.is_empty())
    }

    pub fn has_literals(&self) -> bool {
        !self.literals.is_empty()
    }

    /// Put the original literal text back into `output`.
    ///
    /// `render_mask` must transform a mask token the same way the segment
    /// that carried it was transformed. Every occurrence of the rendered
    /// mask is replaced.
    pub fn restore(&self, mut output: String, render_mask: impl Fn(&str) -> String) -> String {
        for (mask, original) in &self.literals {
            let rendered = render_mask(mask);
            if rendered.is_empty() {
                continue;
            }
            if output.contains(&rendered) {
                output = output.replace(&rendered, original);
            }
        }
        output
    }
}

/// Replace every `{...}` span with a mask token. An unterminated `{`
/// consumes the rest of the string.
pub fn mask_literals(text: &str) -> MaskedText {
    let mut out = String::with_capacity(text.len());
    let mut literals = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(LITERAL_OPEN) {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + LITERAL_OPEN.len_utf8()..];
        let (inner, remainder) = match after_open.find(LITERAL_CLOSE) {
            Some(close) => (
                &after_open[..close],
                &after_open[close + LITERAL_CLOSE.len_utf8()..],
            ),
            None => (after_open, ""),
        };
        let mask = mask_token(literals.len() + 1);
        out.push_str(&mask);
        literals.push((mask, inner.to_string()));
        rest = remainder;
    }
    out.push_str(rest);

    MaskedText {
        text: out,
        literals,
    }
}
