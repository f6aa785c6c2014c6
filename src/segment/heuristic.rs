use crate::segment::TranscriptSegment;

const SPEAKERS: [&str; 2] = ["Speaker 1", "Speaker 2"];

/// Decides which default speaker a paragraph belongs to.
///
/// Policy: strict parity of paragraph index, except that a question paragraph
/// followed by a non-question paragraph must change hands, and parity counts
/// from that boundary afterwards. Swap this type to tune attribution without
/// touching the segmenter.
struct Alternation {
    anchor: usize,
    anchor_speaker: usize,
}

impl Alternation {
    fn new() -> Self {
        Self {
            anchor: 0,
            anchor_speaker: 0,
        }
    }

    fn assign(&mut self, index: usize, prev: Option<&str>, text: &str) -> usize {
        if let Some(prev) = prev {
            if ends_question(prev) && !ends_question(text) {
                // Q/A pair: force the hand-off and restart parity here.
                let handed_off = 1 - self.speaker_at(index - 1);
                self.anchor = index;
                self.anchor_speaker = handed_off;
                return handed_off;
            }
        }
        self.speaker_at(index)
    }

    fn speaker_at(&self, index: usize) -> usize {
        (self.anchor_speaker + (index - self.anchor)) % 2
    }
}

fn ends_question(paragraph: &str) -> bool {
    paragraph.trim_end().ends_with('?')
}

/// Split an unlabeled transcript into blank-line paragraphs, attributing
/// alternating default speakers. Timestamps are left unset.
pub fn segment_by_paragraphs(text: &str) -> Vec<TranscriptSegment> {
    let paragraphs = split_paragraphs(text);
    if paragraphs.is_empty() {
        return Vec::new();
    }

    let mut alternation = Alternation::new();
    let mut segments = Vec::with_capacity(paragraphs.len());

    for (i, paragraph) in paragraphs.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| paragraphs[p].as_str());
        let speaker = alternation.assign(i, prev, paragraph);
        segments.push(TranscriptSegment::new(
            paragraph.clone(),
            Some(SPEAKERS[speaker].to_string()),
        ));
    }

    segments
}

/// Group non-empty lines into paragraphs, joining internal newlines with a
/// single space.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !lines.is_empty() {
                paragraphs.push(lines.join(" "));
                lines.clear();
            }
        } else {
            lines.push(trimmed);
        }
    }

    if !lines.is_empty() {
        paragraphs.push(lines.join(" "));
    }

    paragraphs
}
