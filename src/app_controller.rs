use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::encoding::{ChardetDetector, EncodingDetector, OutputEncoding, SourceEncoding};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::{self, EchoFn, SourceDocument, SubtitleFormat};

// @module: Application controller for subtitle conversion

/// Outcome of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: SubtitleFormat,
    pub lines_written: usize,
}

/// Counts for a directory run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {}/{} files: {} skipped, {} errors",
            self.processed, self.found, self.skipped, self.failed
        )
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Encoding detection collaborator
    detector: Box<dyn EncodingDetector>,
}

impl Controller {
    // @method: Create a controller using chardet for encoding detection
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_detector(config, Box::new(ChardetDetector))
    }

    // @method: Create a controller with a custom encoding detector
    pub fn with_detector(config: Config, detector: Box<dyn EncodingDetector>) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config, detector })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one subtitle file to `<stem>.txt`
    pub fn run(&self, input_file: &Path) -> Result<FileReport> {
        if !FileManager::file_exists(input_file) {
            return Err(AppError::ResourceUnavailable {
                path: input_file.to_path_buf(),
                reason: "file not found".to_string(),
            }
            .into());
        }
        info!("Input file: {}", input_file.display());

        let output_path = FileManager::text_output_path(input_file);
        if output_path.exists() && !self.config.overwrite {
            return Err(AppError::OutputExists(output_path).into());
        }

        let bytes = FileManager::read_bytes(input_file)?;
        let source = SourceEncoding::detect(self.detector.as_ref(), &bytes);
        let output_encoding = self.output_encoding(&source);
        let document = SourceDocument::from_text(&source.decode(&bytes));

        let conversion = subtitle_processor::convert_document(
            &document,
            &self.config.convert_options(),
            self.echo(),
        )
        .map_err(AppError::from)?;

        let payload = output_encoding.encode(&conversion.text)?;
        FileManager::prepare_output(&output_path, self.config.overwrite)?;
        FileManager::write_bytes(&output_path, &payload)?;
        info!("Output file: {}", output_path.display());

        Ok(FileReport {
            input: input_file.to_path_buf(),
            output: output_path,
            format: conversion.format,
            lines_written: conversion.text.lines().count(),
        })
    }

    /// Copy a file unchanged apart from re-encoding, to `<stem>-copy.<ext>`
    pub fn copy(&self, input_file: &Path) -> Result<PathBuf> {
        let bytes = FileManager::read_bytes(input_file)?;
        let output_path = FileManager::copy_output_path(input_file);
        FileManager::prepare_output(&output_path, self.config.overwrite)?;

        let source = SourceEncoding::detect(self.detector.as_ref(), &bytes);
        let text = source.decode(&bytes);
        if self.config.screen {
            let mut stdout = std::io::stdout().lock();
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
        }

        let payload = self.output_encoding(&source).encode(&text)?;
        FileManager::write_bytes(&output_path, &payload)?;
        info!("Output file: {}", output_path.display());
        Ok(output_path)
    }

    /// Convert every subtitle file in a directory.
    /// A failing file is reported and the batch moves on.
    pub fn run_folder(&self, input_dir: &Path) -> Result<BatchSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_subtitle_files(input_dir, self.config.recursive)?;
        if files.is_empty() {
            return Err(anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        info!("Multi file mode. Found {} files", files.len());
        for (i, file) in files.iter().enumerate() {
            info!("{}: {}", i + 1, file.display());
        }

        // Progress bar would interleave with echoed dialogue
        let folder_pb = if self.config.screen {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(files.len() as u64)
        };
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = BatchSummary { found: files.len(), ..BatchSummary::default() };

        for file in &files {
            let file_name = file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            match self.run(file) {
                Ok(_) => summary.processed += 1,
                Err(e) => match e.downcast_ref::<AppError>() {
                    Some(AppError::OutputExists(path)) => {
                        warn!("Skipping {}, output already exists: {}", file_name, path.display());
                        summary.skipped += 1;
                    }
                    _ => {
                        error!("Error processing file {}: {}", file_name, e);
                        summary.failed += 1;
                    }
                },
            }
            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!("{} in {}", summary, Self::format_duration(start_time.elapsed()));
        Ok(summary)
    }

    fn output_encoding(&self, source: &SourceEncoding) -> OutputEncoding {
        OutputEncoding::for_source(source, self.config.force_utf8)
    }

    fn echo(&self) -> Option<EchoFn<'static>> {
        if !self.config.screen {
            return None;
        }
        Some(Box::new(|fragment: &str| {
            let mut stdout = std::io::stdout().lock();
            let _ = stdout.write_all(fragment.as_bytes());
            let _ = stdout.flush();
        }))
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
