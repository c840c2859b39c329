use std::fs;
use std::path::Path;
use std::process;

use serde::Serialize;
use tracing::debug;

use lekhika_core::settings::parse_settings_toml;
use lekhika_core::{FeatureFlags, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Where the engine tables come from.
pub enum Source<'a> {
    DataDir(&'a Path),
    Builtin,
}

/// `--disable-*` switches, applied on top of the settings file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub no_smart_correction: bool,
    pub no_auto_correct: bool,
    pub no_indic_numbers: bool,
    pub no_symbols: bool,
}

impl Overrides {
    pub fn apply(self, mut flags: FeatureFlags) -> FeatureFlags {
        flags.smart_correction &= !self.no_smart_correction;
        flags.auto_correct &= !self.no_auto_correct;
        flags.indic_numbers &= !self.no_indic_numbers;
        flags.symbol_transliteration &= !self.no_symbols;
        flags
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a str,
    output: String,
    flags: FeatureFlags,
}

pub fn load_flags(settings: Option<&str>) -> FeatureFlags {
    let Some(file) = settings else {
        return FeatureFlags::default();
    };
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(parse_settings_toml(&content), "Error in {file}: {}")
}

pub fn open_engine(source: Source<'_>) -> Transliterator {
    match source {
        Source::DataDir(dir) => {
            debug!(dir = %dir.display(), "opening data directory");
            die!(Transliterator::open(dir), "Error: {}")
        }
        Source::Builtin => Transliterator::with_defaults(),
    }
}

pub fn transliterate_cmd(
    source: Source<'_>,
    settings: Option<&str>,
    overrides: Overrides,
    text: &str,
    json: bool,
) {
    let mut engine = open_engine(source);
    engine.set_flags(overrides.apply(load_flags(settings)));
    let output = engine.transliterate(text);

    if json {
        let out = JsonOutput {
            input: text,
            output,
            flags: engine.flags(),
        };
        println!("{}", die!(serde_json::to_string_pretty(&out), "Error: {}"));
    } else {
        println!("{output}");
    }
}
