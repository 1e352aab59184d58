/*!
 * Tests for subtitle format detection
 */

use subtext::subtitle_processor::{SourceDocument, SubtitleFormat, detect};
use crate::common;

fn detect_resource(name: &str) -> SubtitleFormat {
    detect(&SourceDocument::from_text(&common::read_resource(name)))
}

/// Each sample file is classified as its own dialect
#[test]
fn test_detect_withSampleFiles_shouldClassifyEachDialect() {
    assert_eq!(detect_resource("sample.srt"), SubtitleFormat::Srt);
    assert_eq!(detect_resource("sample.vtt"), SubtitleFormat::Vtt);
    assert_eq!(detect_resource("live_captions.vtt"), SubtitleFormat::Vtt);
    assert_eq!(detect_resource("sample_v4plus.ass"), SubtitleFormat::Ass);
    assert_eq!(detect_resource("sample_legacy.ssa"), SubtitleFormat::Ass);
    assert_eq!(detect_resource("not_subtitles.srt"), SubtitleFormat::Unknown);
}

/// Detection depends only on content, and repeats give the same answer
#[test]
fn test_detect_withSameDocument_shouldBeDeterministic() {
    let document = SourceDocument::from_text(&common::read_resource("sample_v4plus.ass"));
    let first = detect(&document);
    for _ in 0..5 {
        assert_eq!(detect(&document), first);
    }
}

/// Every SubStation Alpha marker is enough on its own
#[test]
fn test_detect_withEachAssMarker_shouldReturnAss() {
    for line in ["!: comment", "Timer: 100.0000", "Style: Default", "Comment: 0,x", "Dialogue: 0,x", "ScriptType: v4.00+"] {
        assert_eq!(detect(&SourceDocument::from_text(line)), SubtitleFormat::Ass, "marker line {:?}", line);
    }
}

/// A WEBVTT marker anywhere wins if it comes first
#[test]
fn test_detect_withWebvttAfterNoise_shouldReturnVtt() {
    let document = SourceDocument::from_text("\u{feff}\n\nWEBVTT\n\n1\n00:00:01.000 --> 00:00:02.000\nHi\n");
    assert_eq!(detect(&document), SubtitleFormat::Vtt);
}

/// An SRT-looking first cue after an ASS marker is still ASS
#[test]
fn test_detect_withAssMarkerFirst_shouldPreferEarlierRule() {
    let document = SourceDocument::from_text("Style: x\n1\n00:00:01,000 --> 00:00:02,000\nHi\n");
    assert_eq!(detect(&document), SubtitleFormat::Ass);
}

/// Empty input has no format
#[test]
fn test_detect_withEmptyDocument_shouldReturnUnknown() {
    assert_eq!(detect(&SourceDocument::from_text("")), SubtitleFormat::Unknown);
}

/// Format names used in logs
#[test]
fn test_subtitle_format_display_withEachVariant_shouldUseShortName() {
    assert_eq!(SubtitleFormat::Srt.to_string(), "srt");
    assert_eq!(SubtitleFormat::Vtt.to_string(), "vtt");
    assert_eq!(SubtitleFormat::Ass.to_string(), "ass");
    assert_eq!(SubtitleFormat::Unknown.to_string(), "unknown");
}
