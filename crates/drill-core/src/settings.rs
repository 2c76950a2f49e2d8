//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::matcher::OperatingSystem;
use crate::textbank::Level;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub typing: TypingSettings,
    pub levels: LevelSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypingSettings {
    #[serde(default)]
    pub os: OperatingSystem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelSettings {
    pub beginner_max_kana: usize,
    pub intermediate_max_kana: usize,
}

impl LevelSettings {
    /// Difficulty bucket for a text of `kana_len` characters.
    pub fn classify(&self, kana_len: usize) -> Level {
        if kana_len <= self.beginner_max_kana {
            Level::Beginner
        } else if kana_len <= self.intermediate_max_kana {
            Level::Intermediate
        } else {
            Level::Advanced
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// 0 = unlimited.
    pub max_mistakes: u32,
}

impl SessionSettings {
    pub fn mistake_limit(&self) -> Option<u32> {
        (self.max_mistakes > 0).then_some(self.max_mistakes)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(levels.beginner_max_kana);
    check_positive_usize!(levels.intermediate_max_kana);
    if s.levels.intermediate_max_kana <= s.levels.beginner_max_kana {
        return Err(SettingsError::InvalidValue {
            field: "levels.intermediate_max_kana".to_string(),
            reason: "must be greater than levels.beginner_max_kana".to_string(),
        });
    }

    Ok(())
}
