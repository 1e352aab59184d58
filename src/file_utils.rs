use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::AppError;

// @module: File and directory utilities

// @const: Extensions treated as subtitle input
pub const SUBTITLE_EXTENSIONS: [&str; 4] = ["srt", "vtt", "ssa", "ass"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @checks: Extension is one of the supported subtitle types
    pub fn is_subtitle_file<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
    }

    // @generates: `<stem>.txt` next to the input
    pub fn text_output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        input_file.as_ref().with_extension("txt")
    }

    // @generates: `<stem>-copy.<ext>` next to the input
    pub fn copy_output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
        let mut file_name = format!("{}-copy", stem);
        if let Some(ext) = input_file.extension() {
            file_name.push('.');
            file_name.push_str(&ext.to_string_lossy());
        }
        input_file.with_file_name(file_name)
    }

    /// Find subtitle files in a directory, sorted by path
    pub fn find_subtitle_files<P: AsRef<Path>>(dir: P, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let walker = WalkDir::new(dir.as_ref())
            .follow_links(true)
            .max_depth(if recursive { usize::MAX } else { 1 });

        for entry in walker {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_file() && Self::is_subtitle_file(path) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a whole file as bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        let path = path.as_ref();
        fs::read(path).map_err(|e| AppError::unavailable(path, &e).into())
    }

    /// Apply the overwrite policy to an output path before writing
    pub fn prepare_output<P: AsRef<Path>>(path: P, overwrite: bool) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(());
        }
        if !overwrite {
            return Err(AppError::OutputExists(path.to_path_buf()).into());
        }

        info!("Overwriting old file: {}", path.display());
        fs::remove_file(path).map_err(|e| AppError::unavailable(path, &e))?;
        Ok(())
    }

    /// Write bytes to a file, creating parent directories as needed
    pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::unavailable(parent, &e))?;
        }

        fs::write(path, content).map_err(|e| AppError::unavailable(path, &e))?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}
