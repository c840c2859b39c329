//! Whole-word overrides (`[specialWords]` of the auto-correct source).

use std::collections::HashMap;

use tracing::warn;

use crate::config::ConfigDocument;

/// Bundled auto-correct source.
pub const DEFAULT_AUTOCORRECT_TOML: &str = include_str!("../data/autocorrect.toml");

pub const SPECIAL_WORDS_SECTION: &str = "specialWords";

#[derive(Debug, Clone, Default)]
pub struct SpecialWords {
    words: HashMap<String, String>,
}

impl SpecialWords {
    pub fn from_config(doc: &ConfigDocument) -> Self {
        let words: HashMap<String, String> = doc
            .entries(SPECIAL_WORDS_SECTION)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if words.is_empty() {
            warn!("auto-correct source produced no special words");
        }
        Self { words }
    }

    /// Exact, case-sensitive match on the whole word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SpecialWords {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
