use std::path::PathBuf;

use clap::{Parser, Subcommand};

use driller_engine::matcher::OperatingSystem;
use driller_engine::settings::settings;
use driller_engine::textbank::Level;
use drill_cli::commands::{bank_ops, config_ops, play_ops, romaji_ops};

#[derive(Parser)]
#[command(name = "drilltool", about = "Typing drill diagnostics and terminal game")]
struct Cli {
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize a hiragana reading
    Romanize {
        /// Kana input
        kana: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Type keys against a reading and show the matcher state after each key
    Type {
        /// Kana input
        kana: String,
        /// Keys to type
        keys: String,
        /// Spelling set: none, windows or mac (default: settings)
        #[arg(long)]
        os: Option<OperatingSystem>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play typing rounds on stdin, one line of keys at a time
    Play {
        /// Difficulty: beginner, intermediate, advanced (or 0/1/2)
        #[arg(long, default_value = "beginner")]
        level: Level,
        /// Spelling set: none, windows or mac (default: settings)
        #[arg(long)]
        os: Option<OperatingSystem>,
        /// RNG seed for reproducible text selection
        #[arg(long)]
        seed: Option<u64>,
        /// Text bank TOML file (default: built-in bank)
        #[arg(long)]
        bank: Option<String>,
        /// Number of texts to play
        #[arg(long, default_value = "5")]
        rounds: usize,
        /// Mistakes allowed per text, 0 = unlimited (default: settings)
        #[arg(long)]
        max_mistakes: Option<u32>,
    },
    /// Inspect text banks
    Bank {
        #[command(subcommand)]
        action: BankAction,
    },
    /// Inspect settings files
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum BankAction {
    /// Export the built-in text bank as TOML
    Export,
    /// Validate a text bank TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
    /// List texts with their romaji
    List {
        /// Only show texts of this level
        #[arg(long)]
        level: Option<Level>,
        /// Text bank TOML file (default: built-in bank)
        #[arg(long)]
        bank: Option<String>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Export default settings as TOML
    Export,
    /// Validate a custom settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        driller_engine::init_tracing(dir);
    }

    match cli.command {
        Command::Romanize { kana, json } => romaji_ops::romanize_cmd(&kana, json),
        Command::Type {
            kana,
            keys,
            os,
            json,
        } => {
            let os = os.unwrap_or(settings().typing.os);
            romaji_ops::type_cmd(&kana, &keys, os, json)
        }
        Command::Play {
            level,
            os,
            seed,
            bank,
            rounds,
            max_mistakes,
        } => {
            let opts = play_ops::PlayOptions {
                level,
                os: os.unwrap_or(settings().typing.os),
                seed,
                rounds,
                max_mistakes: max_mistakes.or(settings().session.mistake_limit()),
            };
            play_ops::play_cmd(bank.as_deref(), &opts);
        }
        Command::Bank { action } => match action {
            BankAction::Export => bank_ops::bank_export(),
            BankAction::Validate { file } => bank_ops::bank_validate(&file),
            BankAction::List { level, bank } => bank_ops::bank_list(bank.as_deref(), level),
        },
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
