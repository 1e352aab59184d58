use std::collections::HashMap;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::ConvertOptions;
use super::format::SourceDocument;
use crate::errors::SubtitleError;

// @module: SubStation Alpha dialogue extraction
//
// Legacy (v1/v2) record:
//   Dialogue: Marked=0,0:01:16.0,0:01:23.4,White Text,Usagi,0000,0000,0000,Pretty Soldier Sailor Moon
// Versioned (v4/v4+) record, with an Effect column before the text:
//   Dialogue: Marked=0,0:01:38.95,0:01:41.75,owari,Lupin,0000,0000,0000,,Yeah, love is wonderful.

const DIALOGUE_TAG: &str = "Dialogue:";
const SCRIPT_TYPE_TAG: &str = "ScriptType:";

// @const: Start field sanity check
static START_TIMECODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+:\d{1,2}:\d{1,2}\.\d*$").expect("valid start timecode pattern")
});

/// Column positions of a `Dialogue:` record. Text is always the last column
/// and may itself contain commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueLayout {
    pub field_count: usize,
    pub start: usize,
    pub name: Option<usize>,
}

impl DialogueLayout {
    /// Record layout of scripts without a `ScriptType:` header
    pub const LEGACY: DialogueLayout = DialogueLayout { field_count: 9, start: 1, name: Some(4) };

    /// Record layout of scripts declaring a `ScriptType:`
    pub const VERSIONED: DialogueLayout = DialogueLayout { field_count: 10, start: 1, name: Some(4) };

    /// Build a layout from an `[Events]` `Format:` column list
    pub fn from_format_line(columns: &str) -> Option<Self> {
        let names: Vec<String> = columns
            .split(',')
            .map(|column| column.trim().to_ascii_lowercase())
            .collect();
        if names.last().map(String::as_str) != Some("text") {
            return None;
        }
        let start = names.iter().position(|n| n == "start")?;
        let name = names.iter().position(|n| n == "name" || n == "actor");
        Some(DialogueLayout { field_count: names.len(), start, name })
    }

    /// Split one record body (text after `Dialogue:`) into a cue
    pub fn parse_record(&self, body: &str, line: usize) -> Result<DialogueCue, SubtitleError> {
        let fields: Vec<&str> = body.splitn(self.field_count, ',').collect();
        if fields.len() < self.field_count {
            return Err(SubtitleError::MalformedField {
                line,
                reason: format!("expected {} fields, found {}", self.field_count, fields.len()),
            });
        }

        let start_timecode = fields[self.start].trim();
        if !START_TIMECODE.is_match(start_timecode) {
            return Err(SubtitleError::MalformedField {
                line,
                reason: format!("'{}' is not a start timecode", start_timecode),
            });
        }

        Ok(DialogueCue {
            start_timecode: start_timecode.to_string(),
            speaker: self.name.map(|i| fields[i].trim().to_string()).unwrap_or_default(),
            text: fields[self.field_count - 1].to_string(),
        })
    }
}

/// One dialogue record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueCue {
    pub start_timecode: String,
    pub speaker: String,
    pub text: String,
}

impl DialogueCue {
    /// Text as it should be read, with the speaker prefixed unless names are suppressed
    pub fn visible_text(&self, suppress_names: bool) -> String {
        let text = if suppress_names || self.speaker.is_empty() {
            self.text.clone()
        } else {
            format!("{}: {}", self.speaker, self.text)
        };
        text.replace(r"\n", " ").replace(r"\N", " ")
    }
}

/// Cues keyed by start timecode.
///
/// A cue whose timecode is already present replaces the earlier cue but keeps
/// its original insertion slot.
#[derive(Debug, Default)]
pub struct CueTable {
    cues: Vec<DialogueCue>,
    index: HashMap<String, usize>,
}

impl CueTable {
    pub fn insert(&mut self, cue: DialogueCue) {
        match self.index.get(&cue.start_timecode) {
            Some(&slot) => {
                debug!("Cue at {} replaces an earlier cue with the same start", cue.start_timecode);
                self.cues[slot] = cue;
            }
            None => {
                self.index.insert(cue.start_timecode.clone(), self.cues.len());
                self.cues.push(cue);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Cues in first-insertion order
    pub fn in_file_order(&self) -> Vec<&DialogueCue> {
        self.cues.iter().collect()
    }

    /// Cues ordered by the raw start timecode text
    pub fn in_timecode_order(&self) -> Vec<&DialogueCue> {
        let mut cues = self.in_file_order();
        cues.sort_by(|a, b| a.start_timecode.cmp(&b.start_timecode));
        cues
    }
}

/// Script header facts gathered by the first pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHeader {
    pub script_type: Option<String>,
    pub events_format: Option<DialogueLayout>,
}

impl ScriptHeader {
    pub fn scan(document: &SourceDocument) -> Self {
        let mut script_type = None;
        let mut events_format = None;
        let mut in_events = false;

        for line in document.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                in_events = trimmed.eq_ignore_ascii_case("[events]");
                continue;
            }
            if let Some((_, value)) = line.split_once(SCRIPT_TYPE_TAG) {
                let value = value.trim();
                script_type = (!value.is_empty()).then(|| value.to_string());
            }
            if in_events {
                if let Some(columns) = trimmed.strip_prefix("Format:") {
                    events_format = DialogueLayout::from_format_line(columns);
                    if events_format.is_none() {
                        warn!("Ignoring unusable [Events] format line: {}", trimmed);
                    }
                }
            }
        }

        ScriptHeader { script_type, events_format }
    }

    /// Layout to use for `Dialogue:` records
    pub fn layout(&self) -> DialogueLayout {
        match (&self.events_format, &self.script_type) {
            (Some(layout), _) => *layout,
            (None, Some(_)) => DialogueLayout::VERSIONED,
            (None, None) => DialogueLayout::LEGACY,
        }
    }

    /// Layout for one record body.
    ///
    /// Without any header a record may still carry the empty Effect column of
    /// the versioned layout (`...,0000,0000,0000,,Hello`), which would
    /// otherwise leak a leading comma into the text.
    pub fn layout_for(&self, body: &str) -> DialogueLayout {
        if self.events_format.is_some() || self.script_type.is_some() {
            return self.layout();
        }

        let effect = DialogueLayout::VERSIONED.field_count - 2;
        let fields: Vec<&str> = body.splitn(DialogueLayout::VERSIONED.field_count, ',').collect();
        if fields.len() == DialogueLayout::VERSIONED.field_count && fields[effect].trim().is_empty() {
            DialogueLayout::VERSIONED
        } else {
            DialogueLayout::LEGACY
        }
    }
}

/// Collect every well-formed dialogue record; malformed ones are skipped
pub fn parse_cues(document: &SourceDocument) -> CueTable {
    let header = ScriptHeader::scan(document);
    match &header.script_type {
        Some(version) => info!("SSA version: {}", version),
        None => info!("No version found, assuming v1.0"),
    }

    let mut table = CueTable::default();
    for (index, line) in document.lines().iter().enumerate() {
        let Some((_, body)) = line.split_once(DIALOGUE_TAG) else {
            continue;
        };
        match header.layout_for(body).parse_record(body, index + 1) {
            Ok(cue) => table.insert(cue),
            Err(e) => warn!("Skipping cue: {}", e),
        }
    }
    table
}

/// Extract dialogue lines, by timecode unless file order is requested
pub fn extract(document: &SourceDocument, options: &ConvertOptions) -> Vec<String> {
    let table = parse_cues(document);
    let cues = if options.preserve_order {
        table.in_file_order()
    } else {
        table.in_timecode_order()
    };
    cues.into_iter()
        .map(|cue| cue.visible_text(options.suppress_names))
        .collect()
}
