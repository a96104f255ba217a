//! Process-wide `tracing` subscriber setup.
//!
//! Records emitted through [`TracingLoggerFactory`](crate::log::TracingLoggerFactory)
//! and the library's own diagnostics go wherever this subscriber sends them:
//! - stdout, always
//! - `<log_dir>/<log_file>` when a log directory is configured (cleared on start)
//! - filtered by `RUST_LOG`, falling back to `default_directive`

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{RefmetaError, Result};

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the log file writer, if there is one.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    pub fn writes_to_file(&self) -> bool {
        self.file_guard.is_some()
    }
}

impl std::fmt::Debug for LoggingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingGuard")
            .field("writes_to_file", &self.writes_to_file())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Filter used when `RUST_LOG` is unset (default: "info")
    pub default_directive: String,
    /// Directory for the log file; no file output when `None`
    pub log_dir: Option<PathBuf>,
    /// Log file name inside `log_dir` (default: "refmeta.log")
    pub log_file: String,
    /// ANSI colors on stdout (default: true)
    pub ansi: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            log_dir: None,
            log_file: default_log_file().to_string(),
            ansi: true,
        }
    }
}

impl LoggingOptions {
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(&self.log_file))
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`RefmetaError::Io`] if the log directory or file cannot be
/// prepared, and [`RefmetaError::LoggingInit`] for a bad filter directive or
/// when a global subscriber is already installed.
pub fn init_logging(options: &LoggingOptions) -> Result<LoggingGuard> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&options.default_directive)
            .map_err(|e| RefmetaError::LoggingInit(e.to_string()))?,
    };

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(options.ansi);

    let (file_layer, file_guard) = match &options.log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)?;
            fs::write(log_dir.join(&options.log_file), "")?;

            let file_appender = tracing_appender::rolling::never(log_dir, &options.log_file);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RefmetaError::LoggingInit(e.to_string()))?;

    Ok(LoggingGuard { file_guard })
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "refmeta.log"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LoggingOptions::default();
        assert_eq!(options.default_directive, "info");
        assert_eq!(options.log_file, "refmeta.log");
        assert!(options.log_dir.is_none());
        assert!(options.log_path().is_none());
        assert!(options.ansi);
    }

    #[test]
    fn test_log_path_joins_dir_and_file() {
        let options = LoggingOptions::default().with_log_dir("logs");
        assert_eq!(options.log_path(), Some(PathBuf::from("logs").join("refmeta.log")));
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let with_file = LoggingGuard {
            file_guard: Some(guard),
        };
        assert!(with_file.writes_to_file());
        let without_file = LoggingGuard { file_guard: None };
        assert!(!without_file.writes_to_file());
    }

    // Installing the global subscriber is covered by tests/logging_init.rs,
    // which runs in its own process.
}
