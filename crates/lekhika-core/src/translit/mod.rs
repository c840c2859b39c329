//! Latin → Devanagari transliteration engine.
//!
//! [`Transliterator`] owns the immutable lookup tables and the mutable
//! feature switches. A call runs:
//!
//! 1. boundary insertion before punctuation ([`preprocess_input`])
//! 2. `{...}` literal masking
//! 3. per space-separated segment: correction, then greedy longest match
//! 4. literal restoration

mod longest_match;

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug_span;

use crate::config::parse_config;
use crate::correction::correct;
use crate::mapping::{MappingTable, DEFAULT_MAPPING_TOML};
use crate::segment::{mask_literals, preprocess_input};
use crate::settings::FeatureFlags;
use crate::special_words::{SpecialWords, DEFAULT_AUTOCORRECT_TOML};

pub use longest_match::{transliterate_segment, EXPLICIT_HALANT_MARKER, SUB_SEGMENT_SEPARATOR};

/// Mapping source file name inside a data directory.
pub const MAPPING_FILE: &str = "mapping.toml";
/// Special-words source file name inside a data directory.
pub const AUTOCORRECT_FILE: &str = "autocorrect.toml";

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("required data file not found: {}", path.display())]
    MissingSource { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn read_source(path: PathBuf) -> Result<String, EngineError> {
    std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => EngineError::MissingSource { path },
        _ => EngineError::Io { path, source },
    })
}

#[derive(Debug, Clone)]
pub struct Transliterator {
    mapping: MappingTable,
    special_words: SpecialWords,
    flags: FeatureFlags,
}

impl Transliterator {
    /// Load both sources from `data_dir`. Either one missing is fatal.
    pub fn open(data_dir: &Path) -> Result<Self, EngineError> {
        let _span = debug_span!("open", dir = %data_dir.display()).entered();
        let mapping = read_source(data_dir.join(MAPPING_FILE))?;
        let autocorrect = read_source(data_dir.join(AUTOCORRECT_FILE))?;
        Ok(Self::from_sources(&mapping, &autocorrect))
    }

    /// Build from already-read source texts. Malformed lines are skipped.
    pub fn from_sources(mapping: &str, autocorrect: &str) -> Self {
        Self::from_tables(
            MappingTable::from_config(&parse_config(mapping)),
            SpecialWords::from_config(&parse_config(autocorrect)),
        )
    }

    /// Build from the data files bundled into the crate.
    pub fn with_defaults() -> Self {
        Self::from_sources(DEFAULT_MAPPING_TOML, DEFAULT_AUTOCORRECT_TOML)
    }

    pub fn from_tables(mapping: MappingTable, special_words: SpecialWords) -> Self {
        Self {
            mapping,
            special_words,
            flags: FeatureFlags::default(),
        }
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.mapping
    }

    pub fn special_words(&self) -> &SpecialWords {
        &self.special_words
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: FeatureFlags) {
        self.flags = flags;
    }

    pub fn set_smart_correction(&mut self, enable: bool) {
        self.flags.smart_correction = enable;
    }

    pub fn set_auto_correct(&mut self, enable: bool) {
        self.flags.auto_correct = enable;
    }

    pub fn set_indic_numbers(&mut self, enable: bool) {
        self.flags.indic_numbers = enable;
    }

    pub fn set_symbol_transliteration(&mut self, enable: bool) {
        self.flags.symbol_transliteration = enable;
    }

    /// Transliterate free text. Total: unmapped input passes through.
    pub fn transliterate(&self, text: &str) -> String {
        let _span = debug_span!("transliterate", len = text.len()).entered();
        let flags = self.flags;

        let prepared = preprocess_input(text, &self.mapping);
        let masked = mask_literals(&prepared);

        let mut out = String::with_capacity(text.len() * 3);
        for (i, segment) in masked.segments().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&self.transliterate_word(segment, flags));
        }

        if !masked.has_literals() {
            return out;
        }
        masked.restore(out, |mask| {
            transliterate_segment(mask, &self.mapping, flags)
        })
    }

    fn transliterate_word(&self, segment: &str, flags: FeatureFlags) -> String {
        let mut chars = segment.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if longest_match::bypasses(c, flags) {
                return segment.to_string();
            }
            if let Some(value) = self.mapping.get(segment) {
                return value.to_string();
            }
        }
        let corrected = correct(segment, &self.special_words, flags);
        transliterate_segment(&corrected, &self.mapping, flags)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests;
