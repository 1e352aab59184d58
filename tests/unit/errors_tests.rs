/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use subtext::errors::{AppError, SubtitleError};

#[test]
fn test_subtitleError_unrecognizedFormat_shouldDisplayCorrectly() {
    let display = SubtitleError::UnrecognizedFormat.to_string();
    assert!(display.contains("Unable to determine subtitle format"));
}

#[test]
fn test_subtitleError_malformedField_shouldDisplayLineAndReason() {
    let error = SubtitleError::MalformedField { line: 12, reason: "expected 10 fields, found 3".to_string() };
    let display = error.to_string();
    assert!(display.contains("12"));
    assert!(display.contains("expected 10 fields"));
}

#[test]
fn test_appError_fromSubtitleError_shouldWrap() {
    let error: AppError = SubtitleError::UnrecognizedFormat.into();
    assert!(matches!(error, AppError::Subtitle(SubtitleError::UnrecognizedFormat)));
    assert!(error.to_string().contains("Subtitle error"));
}

#[test]
fn test_appError_outputExists_shouldMentionPath() {
    let error = AppError::OutputExists(PathBuf::from("movie.txt"));
    assert!(error.to_string().contains("movie.txt"));
}

#[test]
fn test_appError_fromAnyhow_shouldRecoverTypedError() {
    let wrapped = anyhow::Error::from(AppError::Encoding("bad".to_string()));
    assert!(matches!(AppError::from(wrapped), AppError::Encoding(_)));

    let plain = anyhow::anyhow!("something else");
    assert!(matches!(AppError::from(plain), AppError::Unknown(_)));
}

#[test]
fn test_appError_fromIoError_shouldBeResourceUnavailable() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = AppError::from(io);
    assert!(matches!(error, AppError::ResourceUnavailable { .. }));
    assert!(error.to_string().contains("denied"));
}
