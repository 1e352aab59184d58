use super::format::{CueHeaderMatcher, SourceDocument};

// @module: SubRip cue walker
//
// Cue blocks are `<n>` / `<start> --> <end>` / text lines / blank line.

/// Extract dialogue lines from a SubRip document, in file order.
///
/// When a line carries the expected sequence number, the following line is
/// consumed to check for a timecode. If that check fails the consumed line is
/// lost and the number line is kept as dialogue.
pub fn extract(document: &SourceDocument) -> Vec<String> {
    let matcher = CueHeaderMatcher::srt();
    let mut dialogue = Vec::new();
    let mut expected = 1;
    let mut lines = document.lines().iter();

    while let Some(line) = lines.next() {
        if matcher.is_sequence_number(line, expected)
            && lines.next().is_some_and(|next| matcher.is_timecode_range(next))
        {
            expected += 1;
        } else if !line.trim().is_empty() {
            dialogue.push(line.clone());
        }
    }

    dialogue
}
