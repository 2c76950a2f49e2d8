pub mod commands;

use std::io;

use driller_engine::settings::SettingsError;
use driller_engine::textbank::TextBankError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    TextBank(#[from] TextBankError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing to type in {0:?}")]
    EmptyReading(String),
}
