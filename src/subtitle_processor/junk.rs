use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: Inline markup removal

// @const: Built-in junk patterns, applied in this order
const BUILTIN_PATTERNS: [&str; 5] = [
    r"<.*?>",   // HTML-like tags
    r"\{.*?\}", // override/control blocks
    r"\[.*\]",  // bracketed annotations
    r"\(.*\)",  // parenthesised annotations
    r"^-\s",    // leading conversational dash
];

// @const: Leading `Speaker:` prefix
const NAME_PATTERN: &str = r"^.*?:";

static BUILTIN_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NAME_PATTERN).unwrap());

/// Ordered list of substitutions that strip markup from a single line.
///
/// Later patterns see the output of earlier ones. An extra pattern that cannot be
/// compiled is reported once and left out, so it is a no-op on every line.
#[derive(Debug, Clone)]
pub struct JunkFilter {
    patterns: Vec<Regex>,
}

impl JunkFilter {
    /// Built-in patterns, plus the speaker-prefix pattern when `suppress_names` is set
    pub fn new(suppress_names: bool) -> Self {
        let mut patterns = BUILTIN_REGEXES.clone();
        if suppress_names {
            patterns.push(NAME_REGEX.clone());
        }
        JunkFilter { patterns }
    }

    /// Like `new`, with user-supplied patterns appended after the built-in ones
    pub fn with_extra_patterns(suppress_names: bool, extra: &[String]) -> Self {
        let mut filter = Self::new(suppress_names);
        for pattern in extra {
            match Self::compile(pattern) {
                Ok(regex) => filter.patterns.push(regex),
                Err(e) => warn!("Skipping junk pattern: {}", e),
            }
        }
        filter
    }

    /// Compile one pattern, mapping failure to `SubtitleError::InvalidPattern`
    pub fn compile(pattern: &str) -> Result<Regex, SubtitleError> {
        Regex::new(pattern).map_err(|e| SubtitleError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
    }

    /// Number of active patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Remove every junk token from `line`
    pub fn strip(&self, line: &str) -> String {
        let mut result = line.to_string();
        for regex in &self.patterns {
            if regex.is_match(&result) {
                result = regex.replace_all(&result, "").into_owned();
            }
        }
        result
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        Self::new(false)
    }
}
