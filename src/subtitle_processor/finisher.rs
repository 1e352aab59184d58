use super::junk::JunkFilter;

// @module: Final pass over the assembled text

/// Re-filter each assembled line and produce the output payload.
///
/// Markup split across a one-line join only becomes visible here. Lines left
/// blank by this pass are dropped, as are repeats of the previous line.
pub fn finish(text: &str, filter: &JunkFilter) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous = String::new();

    for line in text.lines() {
        let cleaned = filter.strip(line);
        let cleaned = cleaned.trim();
        if cleaned.is_empty() || cleaned == previous {
            continue;
        }
        output.push_str(cleaned);
        output.push('\n');
        previous = cleaned.to_string();
    }

    output
}
