//! No-operation logger implementation.

use crate::log::Logger;

/// A logger that discards all records.
///
/// Useful for unit tests where log output would be noise, and for benchmarks.
///
/// # Example
///
/// ```
/// use refmeta_core::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.log_info(Some("resolver"), "This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log_debug(&self, _source: Option<&str>, _message: &str) {}

    #[inline]
    fn log_info(&self, _source: Option<&str>, _message: &str) {}

    #[inline]
    fn log_warning(&self, _source: Option<&str>, _message: &str) {}

    #[inline]
    fn log_error(
        &self,
        _source: Option<&str>,
        _fault: Option<&anyhow::Error>,
        _message: Option<&str>,
    ) {
    }
}
