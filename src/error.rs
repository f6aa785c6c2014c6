use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParleyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Transcript file not found: {0}")]
    TranscriptNotFound(PathBuf),

    #[error("Unknown speaker: {0}")]
    UnknownSpeaker(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParleyError>;
