use crate::segment::TranscriptSegment;

/// Combine consecutive segments spoken by the same speaker.
///
/// Text joins with a blank line, the span runs from the first segment's start
/// to the last segment's end. Unattributed segments only merge with other
/// unattributed segments; non-adjacent runs are never merged.
pub fn merge_adjacent_speaker_segments(segments: &[TranscriptSegment]) -> Vec<TranscriptSegment> {
    let mut merged: Vec<TranscriptSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.speaker == segment.speaker => {
                if !segment.text.is_empty() {
                    // empty turns contribute no separator
                    if !last.text.is_empty() {
                        last.text.push_str("\n\n");
                    }
                    last.text.push_str(&segment.text);
                }
                last.end = segment.end;
            }
            _ => merged.push(segment.clone()),
        }
    }

    merged
}

/// Speaker names in first-occurrence order, unattributed segments omitted.
pub fn unique_speakers(segments: &[TranscriptSegment]) -> Vec<String> {
    let mut speakers: Vec<String> = Vec::new();
    for segment in segments {
        if let Some(name) = &segment.speaker {
            if !speakers.iter().any(|s| s == name) {
                speakers.push(name.clone());
            }
        }
    }
    speakers
}

/// Rewrite every segment attributed to `from` as `to`. Unattributed segments
/// never match.
pub fn rename_speaker(
    segments: &[TranscriptSegment],
    from: &str,
    to: &str,
) -> Vec<TranscriptSegment> {
    segments
        .iter()
        .map(|segment| {
            let mut renamed = segment.clone();
            if renamed.speaker.as_deref() == Some(from) {
                renamed.speaker = Some(to.to_string());
            }
            renamed
        })
        .collect()
}

/// Flatten segments back to transcript text, blank-line separated. With
/// `include_labels`, attributed segments are prefixed `Name: `; unattributed
/// segments always emit bare text.
pub fn segments_to_text(segments: &[TranscriptSegment], include_labels: bool) -> String {
    segments
        .iter()
        .map(|segment| match &segment.speaker {
            Some(name) if include_labels => format!("{}: {}", name, segment.text),
            _ => segment.text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
