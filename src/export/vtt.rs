//! WebVTT subtitle serialization.

use crate::segment::TranscriptSegment;

/// Render segments as WebVTT: a `WEBVTT` header, then cue blocks with
/// `HH:MM:SS.mmm` timestamps. Attributed segments wrap their text in a
/// `<v Name>` voice span, unattributed segments emit bare text.
///
/// Segments must already carry real timestamps (run the timeline allocator
/// first); cues are emitted in sequence order, never re-sorted by time.
pub fn segments_to_vtt(segments: &[TranscriptSegment]) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for segment in segments {
        let line = match &segment.speaker {
            Some(name) => format!("<v {}>{}", name, segment.text),
            None => segment.text.clone(),
        };
        output.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_vtt_time(segment.start),
            format_vtt_time(segment.end),
            line
        ));
    }

    output
}

/// Format seconds as a WebVTT timestamp (HH:MM:SS.mmm).
fn format_vtt_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
}
