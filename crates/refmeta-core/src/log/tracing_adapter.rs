//! Tracing library adapter implementation.

use std::sync::{Arc, Mutex, PoisonError};

use crate::log::{LogLevel, LoggerFactory, SubLogger};
use crate::logging::LoggingGuard;

/// [`LoggerFactory`] whose sub-loggers emit `tracing` events.
///
/// `tracing` targets are static, so the sub-logger name travels as the
/// `logger` field of each event instead.
///
/// # Example
///
/// ```ignore
/// use refmeta_core::log::{FactoryLogger, Logger, TracingLoggerFactory};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already installed
/// let logger = FactoryLogger::new(Arc::new(TracingLoggerFactory::new()), true);
/// logger.log_info(Some("resolver"), "Using tracing backend");
/// ```
#[derive(Default)]
pub struct TracingLoggerFactory {
    guard: Mutex<Option<LoggingGuard>>,
}

impl TracingLoggerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `guard` alive until [`LoggerFactory::shutdown`], so a file
    /// appender installed by [`init_logging`](crate::logging::init_logging)
    /// is flushed when the owning logger goes away.
    pub fn with_guard(guard: LoggingGuard) -> Self {
        Self {
            guard: Mutex::new(Some(guard)),
        }
    }

    pub fn holds_guard(&self) -> bool {
        self.guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn create_logger(&self, name: &str) -> Arc<dyn SubLogger> {
        Arc::new(TracingSubLogger::new(name))
    }

    fn shutdown(&self) {
        let guard = self
            .guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(guard);
    }
}

impl std::fmt::Debug for TracingLoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingLoggerFactory")
            .field("holds_guard", &self.holds_guard())
            .finish()
    }
}

/// Sub-logger that turns each record into a `tracing` event.
#[derive(Debug, Clone)]
pub struct TracingSubLogger {
    name: String,
}

impl TracingSubLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SubLogger for TracingSubLogger {
    fn log(&self, level: LogLevel, fault: Option<&anyhow::Error>, message: Option<&str>) {
        let logger = self.name.as_str();
        let message = message.unwrap_or_default();
        let fault = fault.map(|e| format!("{e:#}"));
        let fault = fault.as_deref();
        match level {
            LogLevel::Debug => tracing::debug!(logger, fault, "{}", message),
            LogLevel::Info => tracing::info!(logger, fault, "{}", message),
            LogLevel::Warning => tracing::warn!(logger, fault, "{}", message),
            LogLevel::Error => tracing::error!(logger, fault, "{}", message),
        }
    }
}
