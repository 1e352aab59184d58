/*!
 * Common test utilities for the subtext test suite
 */

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use subtext::encoding::{EncodingDetector, EncodingGuess};

/// Route log output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    create_test_file_bytes(dir, filename, content.as_bytes())
}

/// Creates a test file with raw bytes in the specified directory
pub fn create_test_file_bytes(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Helper to get the absolute path to a test resource
pub fn test_resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("resources");
    path.push(relative_path);
    path
}

/// Copies a resource into `dir` so outputs land in the temp directory
pub fn copy_resource(dir: &Path, name: &str) -> Result<PathBuf> {
    let target = dir.join(name);
    fs::copy(test_resource_path(name), &target)?;
    Ok(target)
}

/// Reads a resource as text
pub fn read_resource(name: &str) -> String {
    fs::read_to_string(test_resource_path(name)).expect("test resource should be readable")
}

/// Detector that always reports the same label
pub struct FixedDetector(pub &'static str);

impl EncodingDetector for FixedDetector {
    fn detect(&self, _bytes: &[u8]) -> EncodingGuess {
        EncodingGuess { label: self.0.to_string(), confidence: 0.99 }
    }
}

/// Asserts the output invariants every conversion must hold
pub fn assert_clean_output(text: &str) {
    let lines: Vec<&str> = text.lines().collect();
    for line in &lines {
        assert!(!line.trim().is_empty(), "blank line in output: {:?}", text);
    }
    for pair in lines.windows(2) {
        assert_ne!(pair[0].trim(), pair[1].trim(), "consecutive duplicate in output: {:?}", text);
    }
}
