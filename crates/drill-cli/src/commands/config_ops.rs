use std::fs;

use driller_engine::settings::{self, Settings};

use crate::CliError;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

/// Parse and validate a settings file.
pub fn load_settings(file: &str) -> Result<Settings, CliError> {
    let content = fs::read_to_string(file)?;
    Ok(settings::parse_settings_toml(&content)?)
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: typing.os={}, levels.beginner_max_kana={}, levels.intermediate_max_kana={}, session.max_mistakes={}",
        s.typing.os.as_str(),
        s.levels.beginner_max_kana,
        s.levels.intermediate_max_kana,
        s.session.max_mistakes
    );
}
