/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use subtext::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(!config.suppress_names);
    assert!(!config.one_line);
    assert!(!config.preserve_order);
    assert!(!config.force_utf8);
    assert!(!config.overwrite);
    assert!(!config.screen);
    assert!(!config.recursive);
    assert!(config.extra_junk_patterns.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// A partial file only overrides the fields it names
#[test]
fn test_config_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "config.json",
        r#"{ "one_line": true, "log_level": "debug", "extra_junk_patterns": ["♪"] }"#,
    )?;

    let config = Config::load(Some(path.as_path()))?;
    assert!(config.one_line);
    assert!(!config.suppress_names);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.extra_junk_patterns, vec!["♪".to_string()]);

    let options = config.convert_options();
    assert!(options.one_line);
    assert_eq!(options.extra_junk_patterns.len(), 1);
    Ok(())
}

/// Missing or malformed explicit config files are errors
#[test]
fn test_config_load_withBadExplicitPath_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(Config::load(Some(temp_dir.path().join("missing.json").as_path())).is_err());

    let broken = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;
    assert!(Config::load(Some(broken.as_path())).is_err());
    Ok(())
}

/// Invalid junk patterns are rejected by validation
#[test]
fn test_config_validation_withInvalidPattern_shouldFail() {
    let config = Config {
        extra_junk_patterns: vec!["(unclosed".to_string()],
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("(unclosed"));
}

/// Log levels map onto log filters
#[test]
fn test_log_level_withEachVariant_shouldMapToFilter() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
