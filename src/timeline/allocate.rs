use crate::segment::TranscriptSegment;

/// Spread `total_duration` seconds across the segments in proportion to their
/// character counts.
///
/// The result is contiguous: each segment starts where the previous one ends,
/// the first starts at zero, and the last ends exactly at `total_duration`.
/// Empty input or a non-positive duration returns the segments unchanged.
/// When every segment is empty, weights fall back to uniform so coverage
/// still spans the whole timeline.
pub fn estimate_segment_timestamps(
    segments: &[TranscriptSegment],
    total_duration: f64,
) -> Vec<TranscriptSegment> {
    if segments.is_empty() || total_duration <= 0.0 {
        return segments.to_vec();
    }

    let mut weights: Vec<usize> = segments.iter().map(|s| s.text.chars().count()).collect();
    let mut total: usize = weights.iter().sum();
    if total == 0 {
        weights = vec![1; segments.len()];
        total = segments.len();
    }

    let mut timed = Vec::with_capacity(segments.len());
    let mut cumulative = 0usize;

    for (segment, weight) in segments.iter().zip(&weights) {
        let mut next = segment.clone();
        next.start = cumulative as f64 / total as f64 * total_duration;
        cumulative += weight;
        next.end = cumulative as f64 / total as f64 * total_duration;
        timed.push(next);
    }

    timed
}

/// Index of the segment playing at `time`: start inclusive, end exclusive.
///
/// Positions before the first segment (including negative times) resolve to
/// `None`; positions past the last segment clamp to the last index so
/// trailing playback still lands somewhere. A gap between hand-built
/// non-contiguous segments resolves to `None`.
pub fn find_segment_at_time(segments: &[TranscriptSegment], time: f64) -> Option<usize> {
    let last = segments.last()?;

    if time < segments[0].start {
        return None;
    }
    if time >= last.end {
        return Some(segments.len() - 1);
    }

    let index = segments.partition_point(|s| s.end <= time);
    (segments[index].start <= time).then_some(index)
}
