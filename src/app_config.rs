use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::subtitle_processor::{ConvertOptions, JunkFilter};

/// Application configuration module
/// This module handles loading and validating the optional JSON configuration
/// file. Every field has a default so a partial file is valid.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Strip speaker names from dialogue
    pub suppress_names: bool,

    /// Join sentences split over several lines
    pub one_line: bool,

    /// Keep SubStation Alpha dialogue in file order
    pub preserve_order: bool,

    /// Write output as UTF-8 regardless of input encoding
    pub force_utf8: bool,

    /// Replace existing output files
    pub overwrite: bool,

    /// Echo accepted lines to the console
    pub screen: bool,

    /// Descend into subdirectories in directory mode
    pub recursive: bool,

    /// Regular expressions removed from every line after the built-in junk patterns
    pub extra_junk_patterns: Vec<String>,

    /// Log level
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/subtext/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("subtext").join("config.json"))
    }

    /// Read a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load from an explicit path, else the default path if present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.extra_junk_patterns {
            JunkFilter::compile(pattern)
                .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
        }
        Ok(())
    }

    /// Options for the conversion pipeline
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            suppress_names: self.suppress_names,
            one_line: self.one_line,
            preserve_order: self.preserve_order,
            extra_junk_patterns: self.extra_junk_patterns.clone(),
        }
    }
}
