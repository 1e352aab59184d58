/*!
 * # subtext - subtitles to plain text
 *
 * A Rust library for turning subtitle files into readable dialogue text.
 *
 * ## Features
 *
 * - Detects SubRip (.srt), WebVTT (.vtt) and SubStation Alpha (.ssa/.ass)
 * - Strips cue numbers, timecodes, headers, styles and inline markup
 * - Suppresses duplicated lines produced by live captioning tools
 * - Optionally joins sentences split across cues
 * - Sorts SubStation Alpha dialogue by start time
 * - Reads any encoding `chardet` can recognise and writes it back, or UTF-8
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: the conversion pipeline:
 *   - `subtitle_processor::format`: format sniffing and cue header matching
 *   - `subtitle_processor::srt`, `vtt`, `ass`: per-dialect dialogue extraction
 *   - `subtitle_processor::junk`: inline markup removal
 *   - `subtitle_processor::accumulator`: duplicate suppression and one-line mode
 *   - `subtitle_processor::finisher`: final clean-up pass
 * - `encoding`: encoding detection and conversion
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Single file and directory workflows
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod app_controller;
pub mod encoding;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchSummary, Controller, FileReport};
pub use errors::{AppError, SubtitleError};
pub use subtitle_processor::{ConvertOptions, Conversion, SubtitleFormat, convert_document, convert_text, detect};
