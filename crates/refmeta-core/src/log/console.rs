//! Colored console logger.
//!
//! Each record is one or more lines:
//!
//! ```text
//! [INF] [loader] loaded 12 types.
//! [ERR] [loader]
//! ```
//!
//! The trailing period appears only when a message was given. Error records
//! add the fault's debug rendering on the next line. When the level's stack
//! trace switch is on, a captured backtrace follows a message line, unless a
//! fault was supplied (it carries its own).

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use colored::Color;

use crate::config::ConsoleLoggerConfig;
use crate::log::{LogLevel, Logger};

const RESET: &[u8] = b"\x1b[0m";

/// [`Logger`] that writes colored lines to stdout, or to any other writer.
///
/// The writer sits behind a mutex held for the whole record, so concurrent
/// records never interleave their lines or colors.
pub struct ConsoleLogger<W = io::Stdout> {
    config: ConsoleLoggerConfig,
    terminal_colors: bool,
    out: Mutex<W>,
}

impl ConsoleLogger<io::Stdout> {
    pub fn new() -> Self {
        Self::with_config(ConsoleLoggerConfig::default())
    }

    /// Log to stdout. Colors are also suppressed when the environment asks
    /// for it (`NO_COLOR`, `CLICOLOR=0`, no terminal).
    pub fn with_config(config: ConsoleLoggerConfig) -> Self {
        Self {
            config,
            terminal_colors: colored::control::SHOULD_COLORIZE.should_colorize(),
            out: Mutex::new(io::stdout()),
        }
    }
}

impl Default for ConsoleLogger<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleLogger<W> {
    pub fn with_writer(writer: W, config: ConsoleLoggerConfig) -> Self {
        Self {
            config,
            terminal_colors: true,
            out: Mutex::new(writer),
        }
    }

    pub fn config(&self) -> &ConsoleLoggerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConsoleLoggerConfig {
        &mut self.config
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn ansi(&self) -> bool {
        self.config.ansi && self.terminal_colors
    }

    fn write_record(
        &self,
        level: LogLevel,
        source: Option<&str>,
        fault: Option<&anyhow::Error>,
        message: Option<&str>,
    ) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // A broken stdout must not take the caller down with it.
        let _ = self.render(&mut *out, level, source, fault, message);
    }

    fn render(
        &self,
        out: &mut W,
        level: LogLevel,
        source: Option<&str>,
        fault: Option<&anyhow::Error>,
        message: Option<&str>,
    ) -> io::Result<()> {
        let message = message.filter(|m| !m.is_empty());
        let mut out = ColorGuard::new(out, self.config.color(level).into(), self.ansi())?;

        let header = self.header(level, source);
        match message {
            Some(message) => writeln!(out, "{header} {message}.")?,
            None => writeln!(out, "{header}")?,
        }

        match fault {
            Some(fault) => writeln!(out, "{fault:?}")?,
            None if message.is_some() && self.config.log_stack_trace(level) => {
                writeln!(out, "{}", Backtrace::force_capture())?
            }
            None => {}
        }
        Ok(())
    }

    fn header(&self, level: LogLevel, source: Option<&str>) -> String {
        let source = source.unwrap_or_default();
        if self.config.timestamps {
            let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            format!("{now} [{level}] [{source}]")
        } else {
            format!("[{level}] [{source}]")
        }
    }
}

impl<W: Write + Send> Logger for ConsoleLogger<W> {
    fn log_debug(&self, source: Option<&str>, message: &str) {
        self.write_record(LogLevel::Debug, source, None, Some(message));
    }

    fn log_info(&self, source: Option<&str>, message: &str) {
        self.write_record(LogLevel::Info, source, None, Some(message));
    }

    fn log_warning(&self, source: Option<&str>, message: &str) {
        self.write_record(LogLevel::Warning, source, None, Some(message));
    }

    fn log_error(
        &self,
        source: Option<&str>,
        fault: Option<&anyhow::Error>,
        message: Option<&str>,
    ) {
        self.write_record(LogLevel::Error, source, fault, message);
    }
}

impl<W> std::fmt::Debug for ConsoleLogger<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("config", &self.config)
            .field("terminal_colors", &self.terminal_colors)
            .finish_non_exhaustive()
    }
}

/// Sets the foreground color on creation and resets it when dropped, so the
/// terminal is restored on every exit path of a write.
struct ColorGuard<'a, W: Write> {
    out: &'a mut W,
    reset: bool,
}

impl<'a, W: Write> ColorGuard<'a, W> {
    fn new(out: &'a mut W, color: Color, ansi: bool) -> io::Result<Self> {
        // Armed before the escape goes out, so a partial escape is still reset.
        let mut guard = Self { out, reset: ansi };
        if ansi {
            let escape = format!("\x1b[{}m", color.to_fg_str());
            guard.out.write_all(escape.as_bytes())?;
        }
        Ok(guard)
    }
}

impl<W: Write> Write for ColorGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for ColorGuard<'_, W> {
    fn drop(&mut self) {
        if self.reset {
            let _ = self.out.write_all(RESET);
        }
        let _ = self.out.flush();
    }
}
