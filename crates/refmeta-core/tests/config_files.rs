//! Integration tests for loading console logger configuration files.

use std::fs;

use refmeta_core::config::{load_console_config, ConsoleColor, ConsoleLoggerConfig};
use refmeta_core::log::{ConsoleLogger, LogLevel, Logger};
use refmeta_core::RefmetaError;
use tempfile::TempDir;

#[test]
fn test_load_yaml_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("console.yaml");
    fs::write(
        &path,
        "info_color: cyan\nlog_stack_trace_on_error: false\nansi: false\n",
    )
    .unwrap();

    let config = load_console_config(&path).unwrap();
    assert_eq!(config.color(LogLevel::Info), ConsoleColor::Cyan);
    assert!(!config.log_stack_trace(LogLevel::Error));
    assert_eq!(config.color(LogLevel::Warning), ConsoleColor::Yellow);

    let logger = ConsoleLogger::with_writer(Vec::new(), config);
    logger.log_error(Some("cfg"), None, Some("loaded"));
    assert_eq!(
        String::from_utf8(logger.into_inner()).unwrap(),
        "[ERR] [cfg] loaded.\n"
    );
}

#[test]
fn test_load_json_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("console.JSON");
    fs::write(&path, r#"{ "debug_color": "blue", "timestamps": true }"#).unwrap();

    let config = load_console_config(&path).unwrap();
    assert_eq!(config.debug_color, ConsoleColor::Blue);
    assert!(config.timestamps);
}

#[test]
fn test_round_trip_through_yaml_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("console.yml");
    let original = ConsoleLoggerConfig::default()
        .with_color(LogLevel::Error, ConsoleColor::Magenta)
        .with_stack_trace(LogLevel::Debug, true);
    fs::write(&path, serde_yaml::to_string(&original).unwrap()).unwrap();

    assert_eq!(load_console_config(&path).unwrap(), original);
}

#[test]
fn test_unsupported_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("console.toml");
    fs::write(&path, "ansi = false").unwrap();

    let err = load_console_config(&path).unwrap_err();
    assert!(matches!(err, RefmetaError::UnsupportedConfigFormat(_)), "{err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_console_config(tmp.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, RefmetaError::Io(_)), "{err}");
}
