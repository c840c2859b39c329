//! Romanized token → Devanagari lookup table.
//!
//! Built once from the `[charMap]` and `[consonantMap]` sections of the
//! mapping source. Every consonant whose key ends in the inherent vowel `a`
//! is expanded into its matra forms and its dead (halant) form; explicit
//! `charMap` entries always take precedence over derived ones.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::ConfigDocument;
use crate::unicode::HALANT;

/// Bundled mapping source.
pub const DEFAULT_MAPPING_TOML: &str = include_str!("../data/mapping.toml");

pub const CHAR_MAP_SECTION: &str = "charMap";
pub const CONSONANT_MAP_SECTION: &str = "consonantMap";

/// The vowel every bare consonant carries.
pub const INHERENT_VOWEL: char = 'a';

/// Latin vowel suffix → dependent vowel sign appended to the consonant stem.
/// `"a"` is appended to the full consonant key (`ka` + `a` → `kaa`), every
/// other suffix to the stem without its inherent vowel (`k` + `i` → `ki`).
const VOWEL_SIGNS: [(&str, char); 10] = [
    ("a", '\u{093E}'),   // ा
    ("i", '\u{093F}'),   // ि
    ("ee", '\u{0940}'),  // ी
    ("u", '\u{0941}'),   // ु
    ("oo", '\u{0942}'),  // ू
    ("rri", '\u{0943}'), // ृ
    ("e", '\u{0947}'),   // े
    ("ai", '\u{0948}'),  // ै
    ("o", '\u{094B}'),   // ो
    ("au", '\u{094C}'),  // ौ
];

#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
    /// Longest key, in chars. Bounds the longest-match window.
    max_key_chars: usize,
}

impl MappingTable {
    /// Build from a parsed mapping source.
    pub fn from_config(doc: &ConfigDocument) -> Self {
        let table = Self::from_maps(
            doc.entries(CHAR_MAP_SECTION),
            doc.entries(CONSONANT_MAP_SECTION),
        );
        if table.is_empty() {
            warn!("mapping source produced no entries");
        }
        table
    }

    /// Build from explicit and consonant entries. Later duplicates overwrite
    /// earlier ones within each map; consonant derivations only fill keys
    /// that are still absent.
    pub fn from_maps<'a>(
        char_map: impl IntoIterator<Item = (&'a str, &'a str)>,
        consonant_map: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut entries: HashMap<String, String> = char_map
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let explicit = entries.len();

        for (key, base) in last_wins(consonant_map) {
            derive_consonant(&mut entries, key, base);
        }

        debug!(explicit, derived = entries.len() - explicit, "mapping table built");

        let max_key_chars = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            entries,
            max_key_chars,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True if `c` on its own is a key.
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.contains_key(c.encode_utf8(&mut buf))
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deduplicate by key, keeping the last value at the first key's position.
fn last_wins<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Vec<(&'a str, &'a str)> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<(&str, &str)> = Vec::new();
    for (key, value) in pairs {
        match position.get(key) {
            Some(&i) => out[i].1 = value,
            None => {
                position.insert(key, out.len());
                out.push((key, value));
            }
        }
    }
    out
}

fn insert_absent(entries: &mut HashMap<String, String>, key: String, value: String) {
    entries.entry(key).or_insert(value);
}

fn derive_consonant(entries: &mut HashMap<String, String>, key: &str, base: &str) {
    insert_absent(entries, key.to_string(), base.to_string());

    let Some(stem) = key.strip_suffix(INHERENT_VOWEL) else {
        return;
    };
    if stem.is_empty() {
        return;
    }

    for (suffix, sign) in VOWEL_SIGNS {
        let latin = if suffix == "a" {
            format!("{key}{suffix}")
        } else {
            format!("{stem}{suffix}")
        };
        insert_absent(entries, latin, format!("{base}{sign}"));
    }
    insert_absent(entries, stem.to_string(), format!("{base}{HALANT}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn table(char_map: &[(&str, &str)], consonants: &[(&str, &str)]) -> MappingTable {
        MappingTable::from_maps(char_map.iter().copied(), consonants.iter().copied())
    }

    #[test]
    fn test_derives_all_vowel_forms() {
        let t = table(&[], &[("ka", "क")]);
        let expected = [
            ("ka", "क"),
            ("kaa", "का"),
            ("ki", "कि"),
            ("kee", "की"),
            ("ku", "कु"),
            ("koo", "कू"),
            ("krri", "कृ"),
            ("ke", "के"),
            ("kai", "कै"),
            ("ko", "को"),
            ("kau", "कौ"),
            ("k", "क्"),
        ];
        for (key, value) in expected {
            assert_eq!(t.get(key), Some(value), "key={key}");
        }
        assert_eq!(t.len(), expected.len());
        assert_eq!(t.max_key_chars(), 4);
    }

    #[test]
    fn test_explicit_entries_win_over_derived() {
        let t = table(&[("ki", "X"), ("k", "Y")], &[("ka", "क")]);
        assert_eq!(t.get("ki"), Some("X"));
        assert_eq!(t.get("k"), Some("Y"));
        assert_eq!(t.get("ku"), Some("कु"));
    }

    #[test]
    fn test_explicit_consonant_key_is_kept() {
        let t = table(&[("ka", "explicit")], &[("ka", "क")]);
        assert_eq!(t.get("ka"), Some("explicit"));
        assert_eq!(t.get("kaa"), Some("का"));
    }

    #[test]
    fn test_last_duplicate_consonant_wins() {
        let t = table(&[], &[("va", "व"), ("ka", "क"), ("va", "ब")]);
        assert_eq!(t.get("va"), Some("ब"));
        assert_eq!(t.get("vi"), Some("बि"));
        assert_eq!(t.get("v"), Some("ब्"));
        assert_eq!(t.get("ki"), Some("कि"));
    }

    #[test]
    fn test_key_without_inherent_vowel_is_not_expanded() {
        let t = table(&[], &[("x", "क्ष")]);
        assert_eq!(t.get("x"), Some("क्ष"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_bare_a_is_not_a_consonant_stem() {
        let t = table(&[], &[("a", "अ")]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_from_config_reads_both_sections_and_ignores_others() {
        let doc = parse_config(
            "[charMap]\n\".\" = \"।\"\n[consonantMap]\nga = \"ग\"\n[unknown]\nzz = \"?\"\n",
        );
        let t = MappingTable::from_config(&doc);
        assert_eq!(t.get("."), Some("।"));
        assert_eq!(t.get("gi"), Some("गि"));
        assert!(!t.contains_key("zz"));
        assert!(t.contains_char('.'));
        assert!(!t.contains_char(','));
    }

    #[test]
    fn test_bundled_table_loads() {
        let t = MappingTable::from_config(&parse_config(DEFAULT_MAPPING_TOML));
        assert!(t.len() > 300, "expected 300+ entries, got {}", t.len());
        assert_eq!(t.get("ka"), Some("क"));
        assert_eq!(t.get("k"), Some("क्"));
        assert_eq!(t.get("a"), Some("अ"));
        assert_eq!(t.get("5"), Some("५"));
        assert_eq!(t.get("\\"), Some("\u{094D}"));
    }
}
