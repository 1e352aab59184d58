use super::junk::JunkFilter;

// @module: Line acceptance, duplicate suppression and one-line merging

/// Characters that close a sentence in one-line mode
pub const SENTENCE_TERMINATORS: [char; 4] = ['.', '?', '!', '…'];

/// Callback receiving each emitted fragment, terminator included
pub type EchoFn<'a> = Box<dyn FnMut(&str) + 'a>;

/// Collects dialogue lines for one document.
///
/// Lines are junk-filtered and trimmed on the way in. Blank lines and exact
/// repeats of the previously accepted line are dropped.
pub struct LineAccumulator<'a> {
    filter: &'a JunkFilter,
    one_line: bool,
    text: String,
    previous: String,
    accepted: usize,
    echo: Option<EchoFn<'a>>,
}

impl<'a> LineAccumulator<'a> {
    pub fn new(filter: &'a JunkFilter, one_line: bool) -> Self {
        LineAccumulator {
            filter,
            one_line,
            text: String::new(),
            previous: String::new(),
            accepted: 0,
            echo: None,
        }
    }

    /// Surface every emitted fragment to `echo` as soon as it is accepted
    pub fn with_echo(mut self, echo: EchoFn<'a>) -> Self {
        self.echo = Some(echo);
        self
    }

    /// Offer one raw dialogue line
    pub fn accept(&mut self, raw_line: &str) {
        let cleaned = self.filter.strip(raw_line);
        let line = cleaned.trim();
        if line.is_empty() || line == self.previous {
            return;
        }

        let terminator = if self.one_line && !ends_sentence(line) { " " } else { "\n" };
        let fragment = format!("{}{}", line, terminator);

        self.text.push_str(&fragment);
        if let Some(echo) = self.echo.as_mut() {
            echo(&fragment);
        }
        self.previous = line.to_string();
        self.accepted += 1;
    }

    /// Number of lines accepted so far
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Text accumulated so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the accumulator, returning the raw buffer
    pub fn into_text(self) -> String {
        self.text
    }
}

fn ends_sentence(line: &str) -> bool {
    line.chars().last().is_some_and(|c| SENTENCE_TERMINATORS.contains(&c))
}
