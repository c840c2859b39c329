use std::fs;
use std::process;

use lekhika_core::config::parse_config;
use lekhika_core::mapping::{MappingTable, DEFAULT_MAPPING_TOML};
use lekhika_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use lekhika_core::special_words::{SpecialWords, DEFAULT_AUTOCORRECT_TOML};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn mapping_export() {
    print!("{DEFAULT_MAPPING_TOML}");
}

pub fn autocorrect_export() {
    print!("{DEFAULT_AUTOCORRECT_TOML}");
}

pub fn settings_export() {
    print!("{DEFAULT_SETTINGS_TOML}");
}

pub fn mapping_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let doc = parse_config(&content);
    if doc.is_empty() {
        eprintln!("Error: {file} has no entries");
        process::exit(1);
    }
    let mapping = MappingTable::from_config(&doc);
    let words = SpecialWords::from_config(&doc);
    if mapping.is_empty() && words.is_empty() {
        eprintln!("Error: {file} defines no mappings or special words");
        process::exit(1);
    }
    println!(
        "OK: {} mappings (longest key {} chars), {} special words",
        mapping.len(),
        mapping.max_key_chars(),
        words.len()
    );
    println!("sections: {}", doc.section_names().collect::<Vec<_>>().join(", "));
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let flags = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: smart_correction={}, auto_correct={}, indic_numbers={}, symbol_transliteration={}",
        flags.smart_correction, flags.auto_correct, flags.indic_numbers, flags.symbol_transliteration
    );
}
