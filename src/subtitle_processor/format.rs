use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Subtitle dialect detection and cue-header matching

// @const: SubRip timecode range, hours required
static SRT_TIMECODE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*:.*:.*-->.*:.*:.*)").expect("valid SRT timecode pattern")
});

// @const: WebVTT timecode range, hours optional
static VTT_TIMECODE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*:.*-->.*:.*)").expect("valid VTT timecode pattern")
});

// @const: Substrings that only appear in SubStation Alpha scripts
const ASS_MARKERS: [&str; 6] = ["!:", "Timer:", "Style:", "Comment:", "Dialogue:", "ScriptType:"];

/// Subtitle dialect of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    /// SubRip (.srt)
    Srt,
    /// WebVTT (.vtt)
    Vtt,
    /// SubStation Alpha (.ssa/.ass)
    Ass,
    /// No sniffing rule matched
    Unknown,
}

impl SubtitleFormat {
    /// Human readable description used in log output
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Srt => "SubRip subtitles [.srt]",
            Self::Vtt => "WebVTT (Web Video Text Tracks) [.vtt]",
            Self::Ass => "SubStation Alpha subtitles [.ssa/.ass]",
            Self::Unknown => "unknown format",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Ass => "ass",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Decoded input file, split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn from_text(text: &str) -> Self {
        SourceDocument {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pattern rules for one dialect's cue headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueHeaderMatcher {
    format: SubtitleFormat,
}

impl CueHeaderMatcher {
    pub fn srt() -> Self {
        CueHeaderMatcher { format: SubtitleFormat::Srt }
    }

    pub fn vtt() -> Self {
        CueHeaderMatcher { format: SubtitleFormat::Vtt }
    }

    /// Does `line` look like `<start> --> <end>` for this dialect
    pub fn is_timecode_range(&self, line: &str) -> bool {
        match self.format {
            SubtitleFormat::Vtt => VTT_TIMECODE_RANGE.is_match(line),
            _ => SRT_TIMECODE_RANGE.is_match(line),
        }
    }

    /// Does `line` carry the expected cue sequence number
    pub fn is_sequence_number(&self, line: &str, expected: usize) -> bool {
        line.trim() == expected.to_string()
    }
}

/// Classify a document. The first matching rule wins.
pub fn detect(document: &SourceDocument) -> SubtitleFormat {
    let srt = CueHeaderMatcher::srt();
    let lines = document.lines();

    for (index, line) in lines.iter().enumerate() {
        if line.contains("WEBVTT") {
            debug!("WEBVTT marker on line {}", index + 1);
            return SubtitleFormat::Vtt;
        }
        if line.trim() == "1" && lines.get(index + 1).is_some_and(|next| srt.is_timecode_range(next)) {
            debug!("First SubRip cue header on line {}", index + 1);
            return SubtitleFormat::Srt;
        }
        if ASS_MARKERS.iter().any(|marker| line.contains(marker)) {
            debug!("SubStation Alpha marker on line {}", index + 1);
            return SubtitleFormat::Ass;
        }
    }

    SubtitleFormat::Unknown
}
