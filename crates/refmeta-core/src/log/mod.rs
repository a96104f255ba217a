//! Logging abstraction layer.
//!
//! Components log through the [`Logger`] trait and never name a concrete
//! implementation, so the backend can be swapped by the host application.
//!
//! # Architecture
//!
//! - `Logger`: four severity operations, each tagged with a source
//! - `FactoryLogger`: forwards to a host-supplied `LoggerFactory`, caching one
//!   sub-logger per source tag
//! - `TracingLoggerFactory`: production factory that emits `tracing` events
//! - `ConsoleLogger`: colored lines straight to stdout
//! - `NoOpLogger`: silent logger for testing and benchmarking
//!
//! # Usage
//!
//! ```
//! use refmeta_core::log::{Logger, NoOpLogger};
//! use refmeta_core::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct TypeScanner {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl TypeScanner {
//!     fn scan(&self) {
//!         log_info!(self.logger, "scanner", "Starting scan");
//!         log_debug!(self.logger, "scanner", "Scanned {} members", 42);
//!     }
//! }
//!
//! TypeScanner { logger: Arc::new(NoOpLogger) }.scan();
//! ```

mod console;
mod factory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use console::ConsoleLogger;
pub use factory::{FactoryLogger, DEFAULT_CHANNEL, DEFAULT_NAMESPACE};
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger, LoggerFactory, SubLogger};
pub use tracing_adapter::{TracingLoggerFactory, TracingSubLogger};
