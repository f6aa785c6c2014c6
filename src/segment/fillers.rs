use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::segment::TranscriptSegment;

/// Fillers removed wherever they appear as whole words.
const FILLERS: &str = "you know|um|uh|basically|actually";

/// Matches a filler with any directly adjacent commas so the replacement can
/// keep clause punctuation intact.
static FILLER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)(,)?([ \t]*)\b(?:{})\b([ \t]*?)(,)?", FILLERS)).unwrap()
});

/// `like` is ambiguous (verb vs. filler); it is only removed when set off by
/// an adjacent comma. Deeper context analysis is a known limitation.
static LIKE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(,)?([ \t]*)\blike\b([ \t]*?)(,)?").unwrap());

static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r",([ \t]*,)+").unwrap());
static COMMA_BEFORE_STOP: Lazy<Regex> = Lazy::new(|| Regex::new(r",[ \t]*([.!?])").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+([,.!?;:])").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static LEADING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*,[ \t]*").unwrap());

fn strip_keeping_clause_comma(caps: &Captures) -> String {
    // A comma before the filler belongs to the surrounding clause; a comma
    // after it leaves with the filler.
    if caps.get(1).is_some() {
        ",".to_string()
    } else {
        String::new()
    }
}

fn strip_when_comma_adjacent(caps: &Captures) -> String {
    if caps.get(1).is_none() && caps.get(4).is_none() {
        return caps[0].to_string();
    }
    strip_keeping_clause_comma(caps)
}

fn tidy(text: &str) -> String {
    let text = COMMA_RUN.replace_all(text, ",");
    let text = COMMA_BEFORE_STOP.replace_all(&text, "$1");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = MULTI_SPACE.replace_all(&text, " ");
    let text = LEADING_COMMA.replace_all(&text, "");

    text.lines()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Remove the fixed filler-word set from `text`, word-boundary aware and
/// case-insensitive.
pub fn remove_filler_words(text: &str) -> String {
    let cleaned = FILLER_PATTERN.replace_all(text, strip_keeping_clause_comma);
    let cleaned = LIKE_PATTERN.replace_all(&cleaned, strip_when_comma_adjacent);
    tidy(&cleaned)
}

/// Remove caller-supplied filler words (config `cleaning.extra_fillers`),
/// unconditionally on word boundaries. Literal words only.
pub fn remove_custom_fillers(text: &str, extra: &[String]) -> String {
    let mut cleaned = text.to_string();
    for word in extra {
        if word.trim().is_empty() {
            continue;
        }
        let pattern = Regex::new(&format!(
            r"(?i)(,)?([ \t]*)\b{}\b([ \t]*?)(,)?",
            regex::escape(word.trim())
        ));
        // an invalid custom word is skipped rather than failing the pass
        if let Ok(pattern) = pattern {
            cleaned = pattern
                .replace_all(&cleaned, strip_keeping_clause_comma)
                .into_owned();
        }
    }
    tidy(&cleaned)
}

/// Clean each segment's text, preserving speaker, order, and time spans.
pub fn remove_filler_words_from_segments(
    segments: &[TranscriptSegment],
) -> Vec<TranscriptSegment> {
    segments
        .iter()
        .map(|segment| {
            let mut cleaned = segment.clone();
            cleaned.text = remove_filler_words(&segment.text);
            cleaned
        })
        .collect()
}
