use once_cell::sync::Lazy;
use regex::Regex;

use crate::segment::algebra::merge_adjacent_speaker_segments;
use crate::segment::TranscriptSegment;

/// Name assigned to turns with no explicit speaker label.
pub const DEFAULT_SPEAKER: &str = "Speaker 1";

/// Matches `Name: text` at the start of a line. Name tokens are purely
/// alphabetic and capitalized, so `10:30 AM` mid-line and all-lowercase
/// prefixes like `note:` never open a turn.
static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\p{Lu}\p{Alphabetic}*(?: \p{Lu}\p{Alphabetic}*)*):\s*(.*)$").unwrap()
});

/// Whether any line in the transcript carries a valid inline speaker label.
pub fn has_speaker_labels(text: &str) -> bool {
    text.lines().any(|line| SPEAKER_LINE.is_match(line.trim()))
}

/// Accumulates one speaker turn while scanning lines.
struct Turn {
    speaker: String,
    parts: Vec<String>,
}

impl Turn {
    fn open(speaker: String, first: &str) -> Self {
        let mut parts = Vec::new();
        if !first.is_empty() {
            parts.push(first.to_string());
        }
        Self { speaker, parts }
    }

    fn push(&mut self, line: &str) {
        self.parts.push(line.to_string());
    }

    fn into_segment(self) -> TranscriptSegment {
        TranscriptSegment::new(self.parts.join(" "), Some(self.speaker))
    }
}

/// Extract speaker-attributed segments from inline `Name: text` labels.
///
/// Lines without a label continue the most recent open turn (space-joined);
/// text before the first label, or a transcript with no labels at all, falls
/// under the default speaker. Consecutive turns by the same speaker collapse
/// into one segment. Timestamps are left unset.
pub fn parse_inline_speaker_labels(text: &str) -> Vec<TranscriptSegment> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<TranscriptSegment> = Vec::new();
    let mut open: Option<Turn> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = SPEAKER_LINE.captures(trimmed) {
            if let Some(turn) = open.take() {
                segments.push(turn.into_segment());
            }
            open = Some(Turn::open(caps[1].to_string(), caps[2].trim()));
        } else if let Some(turn) = open.as_mut() {
            turn.push(trimmed);
        } else {
            open = Some(Turn::open(DEFAULT_SPEAKER.to_string(), trimmed));
        }
    }

    if let Some(turn) = open.take() {
        segments.push(turn.into_segment());
    }

    merge_adjacent_speaker_segments(&segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speakers(segments: &[TranscriptSegment]) -> Vec<&str> {
        segments
            .iter()
            .map(|s| s.speaker.as_deref().unwrap_or(""))
            .collect()
    }

    fn texts(segments: &[TranscriptSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_alternating_labels() {
        let segments = parse_inline_speaker_labels("John: Hello\nJane: Hi\nJohn: Bye");
        assert_eq!(segments.len(), 3);
        assert_eq!(speakers(&segments), vec!["John", "Jane", "John"]);
        assert_eq!(texts(&segments), vec!["Hello", "Hi", "Bye"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_inline_speaker_labels("").is_empty());
        assert!(parse_inline_speaker_labels("   \n\n  ").is_empty());
    }

    #[test]
    fn test_no_labels_yields_single_default_segment() {
        let segments = parse_inline_speaker_labels("just some text\nacross two lines");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].speaker.as_deref(), Some(DEFAULT_SPEAKER));
        assert_eq!(segments[0].text, "just some text across two lines");
    }

    #[test]
    fn test_lowercase_names_do_not_match() {
        let segments = parse_inline_speaker_labels("note: remember to follow up");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].speaker.as_deref(), Some(DEFAULT_SPEAKER));
        assert_eq!(segments[0].text, "note: remember to follow up");
    }

    #[test]
    fn test_numeric_names_do_not_match() {
        let segments = parse_inline_speaker_labels("Speaker2: hello there");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].speaker.as_deref(), Some(DEFAULT_SPEAKER));
        assert_eq!(segments[0].text, "Speaker2: hello there");
    }

    #[test]
    fn test_clock_time_is_not_a_delimiter() {
        let segments = parse_inline_speaker_labels("John: the meeting is at 10:30 AM");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].speaker.as_deref(), Some("John"));
        assert_eq!(segments[0].text, "the meeting is at 10:30 AM");
    }

    #[test]
    fn test_clock_line_without_name_is_continuation() {
        let segments = parse_inline_speaker_labels("John: see you then\n10:30 works for me");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "see you then 10:30 works for me");
    }

    #[test]
    fn test_multi_word_names() {
        let segments = parse_inline_speaker_labels("Mary Jane Watson: hi everyone");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].speaker.as_deref(), Some("Mary Jane Watson"));
        assert_eq!(segments[0].text, "hi everyone");
    }

    #[test]
    fn test_continuation_lines_join_with_space() {
        let segments = parse_inline_speaker_labels("John: first line\nsecond line\nJane: reply");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "first line second line");
        assert_eq!(segments[1].text, "reply");
    }

    #[test]
    fn test_same_speaker_turns_collapse() {
        let segments = parse_inline_speaker_labels("John: part one\nJohn: part two");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "part one\n\npart two");
    }

    #[test]
    fn test_same_name_after_interruption_starts_fresh() {
        let segments = parse_inline_speaker_labels("John: one\nJane: two\nJohn: three");
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_empty_text_after_delimiter_opens_turn() {
        let segments = parse_inline_speaker_labels("John:\nJane: hi");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].speaker.as_deref(), Some("John"));
        assert_eq!(segments[0].text, "");
    }

    #[test]
    fn test_text_before_first_label_gets_default_speaker() {
        let segments = parse_inline_speaker_labels("intro remarks\nJohn: hello");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].speaker.as_deref(), Some(DEFAULT_SPEAKER));
        assert_eq!(segments[1].speaker.as_deref(), Some("John"));
    }

    #[test]
    fn test_timestamps_stay_unset() {
        let segments = parse_inline_speaker_labels("John: Hello\nJane: Hi");
        assert!(segments.iter().all(|s| s.start == 0.0 && s.end == 0.0));
    }

    #[test]
    fn test_has_speaker_labels() {
        assert!(has_speaker_labels("John: Hello"));
        assert!(has_speaker_labels("plain line\nJane: reply"));
        assert!(!has_speaker_labels("no labels here"));
        assert!(!has_speaker_labels("10:30 is the time"));
    }

    // Regression gate: clearly alternating labels must attribute at least
    // 95% of segments to the ground-truth speaker.
    #[test]
    fn test_interview_fixture_accuracy() {
        let mut fixture = String::new();
        let mut expected = Vec::new();
        for i in 0..20 {
            if i % 2 == 0 {
                fixture.push_str(&format!("Interviewer: question number {}\n", i));
                expected.push("Interviewer");
            } else {
                fixture.push_str(&format!("Guest: answer number {}\n", i));
                expected.push("Guest");
            }
        }

        let segments = parse_inline_speaker_labels(&fixture);
        assert_eq!(segments.len(), expected.len());

        let correct = segments
            .iter()
            .zip(&expected)
            .filter(|(s, want)| s.speaker.as_deref() == Some(**want))
            .count();
        let accuracy = correct as f64 / expected.len() as f64;
        assert!(accuracy >= 0.95, "accuracy {} below gate", accuracy);
    }
}
