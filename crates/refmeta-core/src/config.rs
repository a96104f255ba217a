//! Console logger configuration.
//!
//! The settings can be built in code or loaded from a YAML or JSON file:
//!
//! ```yaml
//! warning_color: magenta
//! log_stack_trace_on_warning: true
//! timestamps: true
//! ```

use std::fs;
use std::path::Path;

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::error::{RefmetaError, Result};
use crate::log::LogLevel;

/// Foreground colors available to the console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleColor {
    Black,
    DarkGray,
    Gray,
    White,
    Red,
    Yellow,
    Green,
    Blue,
    Cyan,
    Magenta,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkGray => Color::BrightBlack,
            ConsoleColor::Gray => Color::White,
            ConsoleColor::White => Color::BrightWhite,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Magenta => Color::Magenta,
        }
    }
}

/// Per-severity colors and stack-trace switches for
/// [`ConsoleLogger`](crate::log::ConsoleLogger).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLoggerConfig {
    pub debug_color: ConsoleColor,
    pub info_color: ConsoleColor,
    pub warning_color: ConsoleColor,
    pub error_color: ConsoleColor,
    pub log_stack_trace_on_debug: bool,
    pub log_stack_trace_on_info: bool,
    pub log_stack_trace_on_warning: bool,
    pub log_stack_trace_on_error: bool,
    /// Emit ANSI color escapes (default: true)
    pub ansi: bool,
    /// Prefix each record with the local time (default: false)
    pub timestamps: bool,
}

impl Default for ConsoleLoggerConfig {
    fn default() -> Self {
        Self {
            debug_color: ConsoleColor::DarkGray,
            info_color: ConsoleColor::Gray,
            warning_color: ConsoleColor::Yellow,
            error_color: ConsoleColor::Red,
            log_stack_trace_on_debug: false,
            log_stack_trace_on_info: false,
            log_stack_trace_on_warning: false,
            log_stack_trace_on_error: true,
            ansi: true,
            timestamps: false,
        }
    }
}

impl ConsoleLoggerConfig {
    pub fn color(&self, level: LogLevel) -> ConsoleColor {
        match level {
            LogLevel::Debug => self.debug_color,
            LogLevel::Info => self.info_color,
            LogLevel::Warning => self.warning_color,
            LogLevel::Error => self.error_color,
        }
    }

    pub fn log_stack_trace(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Debug => self.log_stack_trace_on_debug,
            LogLevel::Info => self.log_stack_trace_on_info,
            LogLevel::Warning => self.log_stack_trace_on_warning,
            LogLevel::Error => self.log_stack_trace_on_error,
        }
    }

    pub fn set_color(&mut self, level: LogLevel, color: ConsoleColor) {
        match level {
            LogLevel::Debug => self.debug_color = color,
            LogLevel::Info => self.info_color = color,
            LogLevel::Warning => self.warning_color = color,
            LogLevel::Error => self.error_color = color,
        }
    }

    pub fn set_log_stack_trace(&mut self, level: LogLevel, enabled: bool) {
        match level {
            LogLevel::Debug => self.log_stack_trace_on_debug = enabled,
            LogLevel::Info => self.log_stack_trace_on_info = enabled,
            LogLevel::Warning => self.log_stack_trace_on_warning = enabled,
            LogLevel::Error => self.log_stack_trace_on_error = enabled,
        }
    }

    pub fn with_color(mut self, level: LogLevel, color: ConsoleColor) -> Self {
        self.set_color(level, color);
        self
    }

    pub fn with_stack_trace(mut self, level: LogLevel, enabled: bool) -> Self {
        self.set_log_stack_trace(level, enabled);
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load a [`ConsoleLoggerConfig`] from a `.yaml`, `.yml` or `.json` file.
pub fn load_console_config(path: impl AsRef<Path>) -> Result<ConsoleLoggerConfig> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            ConsoleLoggerConfig::from_yaml_str(&fs::read_to_string(path)?)
        }
        Some("json") => ConsoleLoggerConfig::from_json_str(&fs::read_to_string(path)?),
        _ => Err(RefmetaError::UnsupportedConfigFormat(path.display().to_string())),
    }
}
