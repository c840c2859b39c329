use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lekhika_cli::commands::translit_ops::{Overrides, Source};
use lekhika_cli::commands::{config_ops, translit_ops, word_ops};
use lekhika_cli::data_dir::resolve_data_dir;

#[derive(Parser)]
#[command(name = "lekhika", about = "Nepali (Devanagari) transliteration", version)]
struct Cli {
    /// Directory holding mapping.toml and autocorrect.toml
    #[arg(long, global = true, conflicts_with = "builtin")]
    data_dir: Option<PathBuf>,
    /// Use the tables compiled into the binary instead of a data directory
    #[arg(long, global = true)]
    builtin: bool,
    /// Feature settings TOML (`[features]` table)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Debug logging to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FlagArgs {
    #[arg(long)]
    disable_smart_correction: bool,
    #[arg(long)]
    disable_autocorrect: bool,
    #[arg(long)]
    disable_indic_numbers: bool,
    #[arg(long)]
    disable_symbols: bool,
}

impl From<FlagArgs> for Overrides {
    fn from(a: FlagArgs) -> Self {
        Overrides {
            no_smart_correction: a.disable_smart_correction,
            no_auto_correct: a.disable_autocorrect,
            no_indic_numbers: a.disable_indic_numbers,
            no_symbols: a.disable_symbols,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate romanized text to Devanagari
    Transliterate {
        /// Text to transliterate; multiple arguments are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        flags: FlagArgs,
    },
    /// Check whether each word is a well-formed Devanagari word
    Validate {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Strip danda and punctuation from text
    Sanitize { text: String },
    /// Print the built-in mapping source
    MappingExport,
    /// Print the built-in special-words source
    AutocorrectExport,
    /// Parse a mapping or special-words file and report entry counts
    MappingValidate { file: String },
    /// Print the default settings TOML
    SettingsExport,
    /// Parse a settings TOML file and report the resulting switches
    SettingsValidate { file: String },
    /// Print the engine version
    Version,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "lekhika_core=debug,lekhika_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Transliterate { text, json, flags } => {
            let dir = (!cli.builtin).then(|| resolve_data_dir(cli.data_dir));
            let source = match &dir {
                Some(dir) => Source::DataDir(dir),
                None => Source::Builtin,
            };
            translit_ops::transliterate_cmd(
                source,
                cli.settings.as_deref(),
                flags.into(),
                &text.join(" "),
                json,
            );
        }
        Command::Validate { words } => word_ops::validate(&words),
        Command::Sanitize { text } => word_ops::sanitize(&text),
        Command::MappingExport => config_ops::mapping_export(),
        Command::AutocorrectExport => config_ops::autocorrect_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Version => println!("lekhika {}", lekhika_core::VERSION),
    }
}
