//! SRT (SubRip) subtitle serialization.

use crate::segment::TranscriptSegment;

/// Render segments as SubRip text: 1-based index, `HH:MM:SS,mmm` timestamp
/// line, then the text prefixed `Name: ` when a speaker is attributed.
///
/// Segments must already carry real timestamps (run the timeline allocator
/// first); entries are emitted in sequence order, never re-sorted by time.
pub fn segments_to_srt(segments: &[TranscriptSegment]) -> String {
    let mut output = String::new();

    for (i, segment) in segments.iter().enumerate() {
        let line = match &segment.speaker {
            Some(name) => format!("{}: {}", name, segment.text),
            None => segment.text.clone(),
        };
        output.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_srt_time(segment.start),
            format_srt_time(segment.end),
            line
        ));
    }

    output
}

/// Format seconds as an SRT timestamp (HH:MM:SS,mmm).
fn format_srt_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, ms)
}
