use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod srt;
pub mod vtt;

pub use srt::segments_to_srt;
pub use vtt::segments_to_vtt;

/// Output format for transcript export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// SRT subtitle format
    Srt,
    /// WebVTT subtitle format
    Vtt,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
        }
    }
}
