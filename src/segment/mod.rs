use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod algebra;
pub mod fillers;
pub mod heuristic;
pub mod labels;

pub use algebra::{
    merge_adjacent_speaker_segments, rename_speaker, segments_to_text, unique_speakers,
};
pub use fillers::{remove_custom_fillers, remove_filler_words, remove_filler_words_from_segments};
pub use heuristic::segment_by_paragraphs;
pub use labels::{has_speaker_labels, parse_inline_speaker_labels};

/// A span of transcript text attributed to one speaker.
///
/// Times are in seconds. Freshly parsed segments carry the unset sentinel
/// `start == end == 0.0` until the timeline allocator assigns real spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub speaker: Option<String>,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, speaker: Option<String>) -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            text: text.into(),
            speaker,
        }
    }

    /// Whether this segment carries a real time span rather than the sentinel.
    pub fn is_timed(&self) -> bool {
        self.end > self.start
    }
}

/// How to split a raw transcript into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Use inline labels when any line carries one, paragraphs otherwise
    #[default]
    Auto,
    /// Inline `Name: text` speaker labels
    Labels,
    /// Blank-line paragraphs with alternating speakers
    Paragraphs,
}

/// Parse a raw transcript with the given strategy.
pub fn parse_transcript(text: &str, strategy: Strategy) -> Vec<TranscriptSegment> {
    match strategy {
        Strategy::Labels => parse_inline_speaker_labels(text),
        Strategy::Paragraphs => segment_by_paragraphs(text),
        Strategy::Auto => {
            if has_speaker_labels(text) {
                parse_inline_speaker_labels(text)
            } else {
                segment_by_paragraphs(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_segment_carries_unset_sentinel() {
        let segment = TranscriptSegment::new("Hello", Some("Alice".to_string()));
        assert_eq!(segment.start, 0.0);
        assert_eq!(segment.end, 0.0);
        assert!(!segment.is_timed());
    }

    #[test]
    fn test_segment_json_roundtrip() {
        let segment = TranscriptSegment {
            start: 1.5,
            end: 4.0,
            text: "Hello there".to_string(),
            speaker: Some("Alice".to_string()),
        };

        let json = serde_json::to_string(&segment).unwrap();
        let parsed: TranscriptSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, segment);
    }

    #[test]
    fn test_auto_strategy_prefers_labels() {
        let segments = parse_transcript("John: Hello\nJane: Hi", Strategy::Auto);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].speaker.as_deref(), Some("John"));
    }

    #[test]
    fn test_auto_strategy_falls_back_to_paragraphs() {
        let segments = parse_transcript("first paragraph\n\nsecond paragraph", Strategy::Auto);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].speaker.as_deref(), Some("Speaker 1"));
        assert_eq!(segments[1].speaker.as_deref(), Some("Speaker 2"));
    }
}
