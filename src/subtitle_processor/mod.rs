/*!
 * Subtitle to plain text conversion.
 *
 * The pipeline for one document is:
 * - `format::detect` classifies the document as SRT, VTT or ASS
 * - the matching walker (`srt`, `vtt`, `ass`) pulls out the dialogue lines
 * - each line goes through the `LineAccumulator` (junk filter, blank and
 *   duplicate suppression, optional one-line merging)
 * - `finisher::finish` runs the junk filter once more over the assembled text
 */

pub mod accumulator;
pub mod ass;
pub mod finisher;
pub mod format;
pub mod junk;
pub mod srt;
pub mod vtt;

use log::{debug, info};

use crate::errors::SubtitleError;

pub use accumulator::{EchoFn, LineAccumulator};
pub use ass::DialogueCue;
pub use format::{SourceDocument, SubtitleFormat, detect};
pub use junk::JunkFilter;

/// Caller-supplied switches for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Strip leading `Name:` prefixes and ASS speaker names
    pub suppress_names: bool,
    /// Merge lines until a sentence terminator is seen
    pub one_line: bool,
    /// Keep ASS dialogue in file order instead of sorting by start time
    pub preserve_order: bool,
    /// Additional junk patterns applied after the built-in ones
    pub extra_junk_patterns: Vec<String>,
}

impl ConvertOptions {
    pub fn junk_filter(&self) -> JunkFilter {
        JunkFilter::with_extra_patterns(self.suppress_names, &self.extra_junk_patterns)
    }
}

/// Result of converting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub format: SubtitleFormat,
    pub text: String,
    pub lines_accepted: usize,
}

/// Dialogue lines of a document in reading order, before any filtering
pub fn extract_dialogue(
    document: &SourceDocument,
    format: SubtitleFormat,
    options: &ConvertOptions,
) -> Result<Vec<String>, SubtitleError> {
    match format {
        SubtitleFormat::Srt => Ok(srt::extract(document)),
        SubtitleFormat::Vtt => Ok(vtt::extract(document)),
        SubtitleFormat::Ass => Ok(ass::extract(document, options)),
        SubtitleFormat::Unknown => Err(SubtitleError::UnrecognizedFormat),
    }
}

/// Convert a decoded document to plain text
pub fn convert_document(
    document: &SourceDocument,
    options: &ConvertOptions,
    echo: Option<EchoFn<'_>>,
) -> Result<Conversion, SubtitleError> {
    let format = detect(document);
    if format == SubtitleFormat::Unknown {
        return Err(SubtitleError::UnrecognizedFormat);
    }
    info!("Processing file as {}", format.display_name());

    let dialogue = extract_dialogue(document, format, options)?;
    debug!("Extracted {} dialogue lines from {} source lines", dialogue.len(), document.len());

    let filter = options.junk_filter();
    let mut accumulator = LineAccumulator::new(&filter, options.one_line);
    if let Some(echo) = echo {
        accumulator = accumulator.with_echo(echo);
    }
    for line in &dialogue {
        accumulator.accept(line);
    }
    let lines_accepted = accumulator.accepted();
    let text = finisher::finish(&accumulator.into_text(), &filter);

    Ok(Conversion { format, text, lines_accepted })
}

/// Convenience wrapper over `convert_document` for already decoded text
pub fn convert_text(text: &str, options: &ConvertOptions) -> Result<Conversion, SubtitleError> {
    convert_document(&SourceDocument::from_text(text), options, None)
}
