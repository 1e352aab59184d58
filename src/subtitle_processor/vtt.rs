use super::format::{CueHeaderMatcher, SourceDocument};

// @module: WebVTT cue walker
//
// Everything before the first cue header (metadata, STYLE and NOTE blocks) is
// header and never emitted. Cue identifiers are optional and timecodes may
// omit the hour.

/// Extract dialogue lines from a WebVTT document, in file order
pub fn extract(document: &SourceDocument) -> Vec<String> {
    let matcher = CueHeaderMatcher::vtt();
    let mut dialogue = Vec::new();
    let mut expected = 1;
    let mut past_header = false;
    let mut lines = document.lines().iter();

    while let Some(line) = lines.next() {
        if matcher.is_sequence_number(line, expected)
            && lines.next().is_some_and(|next| matcher.is_timecode_range(next))
        {
            expected += 1;
            past_header = true;
        } else if matcher.is_timecode_range(line) {
            past_header = true;
        } else if past_header && !line.trim().is_empty() {
            dialogue.push(line.clone());
        }
    }

    dialogue
}
