/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use subtext::errors::AppError;
use subtext::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Output paths sit next to the input
#[test]
fn test_output_paths_withSubtitleInput_shouldNameSiblings() {
    let input = Path::new("/tmp/show/episode.01.srt");
    assert_eq!(FileManager::text_output_path(input), Path::new("/tmp/show/episode.01.txt"));
    assert_eq!(FileManager::copy_output_path(input), Path::new("/tmp/show/episode.01-copy.srt"));
    assert_eq!(FileManager::copy_output_path(Path::new("noext")), Path::new("noext-copy"));
}

/// Subtitle extensions are matched case-insensitively
#[test]
fn test_is_subtitle_file_withVariousExtensions_shouldMatchSupportedOnes() {
    for name in ["a.srt", "b.VTT", "c.ssa", "d.Ass"] {
        assert!(FileManager::is_subtitle_file(name), "{} should match", name);
    }
    for name in ["a.txt", "b.sub", "srt", "c.srt.bak"] {
        assert!(!FileManager::is_subtitle_file(name), "{} should not match", name);
    }
}

/// Directory search honours the recursive switch and sorts results
#[test]
fn test_find_subtitle_files_withNestedDirs_shouldRespectRecursion() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.vtt", "WEBVTT")?;
    common::create_test_file(root, "a.srt", "1")?;
    common::create_test_file(root, "notes.txt", "ignore me")?;
    fs::create_dir(root.join("season2"))?;
    common::create_test_file(&root.join("season2"), "c.ass", "Dialogue:")?;

    let flat = FileManager::find_subtitle_files(root, false)?;
    assert_eq!(flat, vec![root.join("a.srt"), root.join("b.vtt")]);

    let deep = FileManager::find_subtitle_files(root, true)?;
    assert_eq!(deep.len(), 3);
    assert!(deep.contains(&root.join("season2").join("c.ass")));

    Ok(())
}

/// Existing output is protected unless overwriting is allowed
#[test]
fn test_prepare_output_withExistingFile_shouldFollowOverwritePolicy() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let existing = common::create_test_file(temp_dir.path(), "old.txt", "old")?;

    let err = FileManager::prepare_output(&existing, false).unwrap_err();
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::OutputExists(_))));
    assert!(existing.exists());

    FileManager::prepare_output(&existing, true)?;
    assert!(!existing.exists());

    FileManager::prepare_output(temp_dir.path().join("fresh.txt"), false)?;
    Ok(())
}

/// Reading a missing file reports the path
#[test]
fn test_read_bytes_withMissingFile_shouldReportResourceUnavailable() {
    let err = FileManager::read_bytes("definitely/missing/file.srt").unwrap_err();
    match err.downcast_ref::<AppError>() {
        Some(AppError::ResourceUnavailable { path, .. }) => {
            assert_eq!(path, Path::new("definitely/missing/file.srt"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Writes create missing parent directories
#[test]
fn test_write_bytes_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("result.txt");
    FileManager::write_bytes(&target, b"hello\n")?;
    assert_eq!(fs::read(&target)?, b"hello\n");
    Ok(())
}
