use std::fs;

use unicode_width::UnicodeWidthStr;

use driller_engine::settings::settings;
use driller_engine::textbank::{Level, TextBank};

use crate::CliError;

/// The bank at `file`, or the built-in bank.
pub fn load_bank(file: Option<&str>) -> Result<TextBank, CliError> {
    match file {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Ok(TextBank::parse(&content, &settings().levels)?)
        }
        None => Ok(TextBank::builtin().clone()),
    }
}

/// The built-in bank in `[[texts]]` layout, ready to edit and pass to `--bank`.
pub fn export_toml() -> Result<String, CliError> {
    Ok(TextBank::builtin().to_toml()?)
}

pub fn bank_export() {
    let toml = die!(export_toml(), "Error: {}");
    print!("{toml}");
}

/// One-line summary: total and per-level counts.
pub fn summarize(bank: &TextBank) -> String {
    let counts: Vec<String> = Level::ALL
        .iter()
        .map(|&level| format!("{} {}", level.as_str(), bank.texts_for(level).count()))
        .collect();
    format!("{} texts ({})", bank.len(), counts.join(", "))
}

pub fn bank_validate(file: &str) {
    let bank = die!(load_bank(Some(file)), "Error: {}");
    println!("OK: {}", summarize(&bank));
}

/// Aligned listing of `title  kana  romaji`, optionally filtered by level.
pub fn format_listing(bank: &TextBank, level: Option<Level>) -> Vec<String> {
    let rows: Vec<_> = bank
        .iter()
        .filter(|&(_, l)| level.map_or(true, |want| want == l))
        .collect();
    let title_width = rows.iter().map(|(t, _)| t.title.width()).max().unwrap_or(0);
    let kana_width = rows.iter().map(|(t, _)| t.kana.width()).max().unwrap_or(0);

    rows.iter()
        .map(|(t, l)| {
            format!(
                "{:<12} {}{}  {}{}  {}",
                l.as_str(),
                t.title,
                " ".repeat(title_width - t.title.width()),
                t.kana,
                " ".repeat(kana_width - t.kana.width()),
                t.romaji()
            )
        })
        .collect()
}

pub fn bank_list(file: Option<&str>, level: Option<Level>) {
    let bank = die!(load_bank(file), "Error: {}");
    for line in format_listing(&bank, level) {
        println!("{}", line.trim_end());
    }
}
