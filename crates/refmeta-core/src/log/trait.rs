//! Logger trait definitions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Development-time diagnostics
    Debug,
    /// General informational events
    Info,
    /// Recoverable anomalies
    Warning,
    /// Failures
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Fixed three-letter tag printed in front of console records.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warning => "WRN",
            LogLevel::Error => "ERR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Logging interface for library components.
///
/// Every operation takes a `source` tag naming the logical emitter. Calls are
/// fire-and-forget: implementations never return or raise a failure from
/// their backend, so a log call cannot abort the caller.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; callers share them as
/// `Arc<dyn Logger>` without further locking.
///
/// # Example
///
/// ```
/// use refmeta_core::log::{Logger, NoOpLogger};
/// use refmeta_core::{log_error, log_info};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// log_info!(logger, "loader", "loaded {} types", 12);
/// log_error!(logger, "loader", "missing assembly");
/// ```
pub trait Logger: Send + Sync {
    fn log_debug(&self, source: Option<&str>, message: &str);

    fn log_info(&self, source: Option<&str>, message: &str);

    fn log_warning(&self, source: Option<&str>, message: &str);

    /// Record a failure. Either `fault` or `message` should be present for
    /// the record to say anything, but both are optional.
    fn log_error(&self, source: Option<&str>, fault: Option<&anyhow::Error>, message: Option<&str>);
}

/// A logger scoped to one source, handed out by a [`LoggerFactory`].
pub trait SubLogger: Send + Sync {
    fn log(&self, level: LogLevel, fault: Option<&anyhow::Error>, message: Option<&str>);
}

/// Creates named sub-loggers. Supplied by the host application.
pub trait LoggerFactory: Send + Sync {
    fn create_logger(&self, name: &str) -> Arc<dyn SubLogger>;

    /// Release backend resources. Called by an owning
    /// [`FactoryLogger`](crate::log::FactoryLogger) when it is dropped.
    fn shutdown(&self) {}
}

/// Convenience macros taking a source tag and format arguments.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $source:expr, $($arg:tt)+) => {
        $logger.log_debug(::std::option::Option::Some($source), &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $source:expr, $($arg:tt)+) => {
        $logger.log_info(::std::option::Option::Some($source), &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $source:expr, $($arg:tt)+) => {
        $logger.log_warning(::std::option::Option::Some($source), &::std::format!($($arg)+))
    };
}

/// `log_error!(logger, source, fault = &err)`, optionally followed by format
/// arguments, or `log_error!(logger, source, "format", ...)` for a message only.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $source:expr, fault = $fault:expr) => {
        $logger.log_error(
            ::std::option::Option::Some($source),
            ::std::option::Option::Some($fault),
            ::std::option::Option::None,
        )
    };
    ($logger:expr, $source:expr, fault = $fault:expr, $($arg:tt)+) => {
        $logger.log_error(
            ::std::option::Option::Some($source),
            ::std::option::Option::Some($fault),
            ::std::option::Option::Some(&::std::format!($($arg)+)),
        )
    };
    ($logger:expr, $source:expr, $($arg:tt)+) => {
        $logger.log_error(
            ::std::option::Option::Some($source),
            ::std::option::Option::None,
            ::std::option::Option::Some(&::std::format!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_tags() {
        let tags: Vec<_> = LogLevel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(tags, ["DBG", "INF", "WRN", "ERR"]);
    }

    #[test]
    fn test_log_level_serde() {
        assert_eq!(serde_json::to_string(&LogLevel::Warning).unwrap(), "\"warning\"");
        let level: LogLevel = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }
}
