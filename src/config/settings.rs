use serde::{Deserialize, Serialize};

use crate::export::OutputFormat;
use crate::segment::Strategy;

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    #[serde(default)]
    pub cleaning: CleaningConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            segmentation: SegmentationConfig::default(),
            cleaning: CleaningConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Parsing strategy: auto, labels, paragraphs
    #[serde(default)]
    pub strategy: Strategy,
    /// Merge adjacent same-speaker turns after parsing
    #[serde(default)]
    pub merge_turns: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            merge_turns: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Extra filler words removed on top of the built-in set
    #[serde(default)]
    pub extra_fillers: Vec<String>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            extra_fillers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default export format: text, srt, vtt
    #[serde(default)]
    pub format: OutputFormat,
    /// Prefix attributed segments with `Name: ` in text output
    #[serde(default = "default_true")]
    pub include_labels: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_labels: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParleyConfig::default();
        assert_eq!(config.segmentation.strategy, Strategy::Auto);
        assert!(!config.segmentation.merge_turns);
        assert!(config.cleaning.extra_fillers.is_empty());
        assert_eq!(config.export.format, OutputFormat::Text);
        assert!(config.export.include_labels);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ParleyConfig = toml::from_str(
            r#"
            [cleaning]
            extra_fillers = ["frankly"]
            "#,
        )
        .unwrap();

        assert_eq!(config.cleaning.extra_fillers, vec!["frankly"]);
        assert_eq!(config.segmentation.strategy, Strategy::Auto);
        assert!(config.export.include_labels);
    }

    #[test]
    fn test_strategy_and_format_names() {
        let config: ParleyConfig = toml::from_str(
            r#"
            [segmentation]
            strategy = "paragraphs"

            [export]
            format = "srt"
            "#,
        )
        .unwrap();

        assert_eq!(config.segmentation.strategy, Strategy::Paragraphs);
        assert_eq!(config.export.format, OutputFormat::Srt);
    }
}
