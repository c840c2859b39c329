//! Feature switches, optionally loaded from TOML.
//!
//! - `FeatureFlags::default()` enables everything
//! - `parse_settings_toml(toml)` reads a `[features]` table; missing keys
//!   keep their default
//! - The bundled default is embedded via `include_str!("default_settings.toml")`

use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// Switches read by every `transliterate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Phonetic rewrites applied to each segment before lookup.
    pub smart_correction: bool,
    /// Whole-word overrides from the special-words source.
    pub auto_correct: bool,
    /// ASCII digits → Devanagari digits.
    pub indic_numbers: bool,
    /// Non-alphanumeric ASCII symbols through the mapping table.
    pub symbol_transliteration: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            smart_correction: true,
            auto_correct: true,
            indic_numbers: true,
            symbol_transliteration: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    features: FeatureFlags,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<FeatureFlags, SettingsError> {
    let file: SettingsFile =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    Ok(file.features)
}
