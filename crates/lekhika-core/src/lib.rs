pub mod config;
pub mod correction;
pub mod lexicon;
pub mod mapping;
pub mod segment;
pub mod settings;
pub mod special_words;
pub mod translit;
pub mod unicode;
pub mod validate;

pub use settings::FeatureFlags;
pub use translit::{EngineError, Transliterator};
pub use validate::{grapheme_count, is_valid_devanagari_word, sanitize_devanagari_word};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
