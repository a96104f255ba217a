//! refmeta-core: helpers shared by the refmeta runtime-metadata tooling.
//!
//! - [`digits`]: printed width of integers, without formatting them
//! - [`visibility`]: member accessibility levels
//! - [`time`]: tick counts to fractional milliseconds
//! - [`log`]: pluggable logger trait with factory-backed and console implementations

pub mod config;
pub mod digits;
pub mod error;
pub mod log;
pub mod logging;
pub mod time;
pub mod visibility;

pub use config::{ConsoleColor, ConsoleLoggerConfig};
pub use digits::{digit_count, DigitCount};
pub use error::RefmetaError;
pub use log::{ConsoleLogger, FactoryLogger, LogLevel, Logger, LoggerFactory, NoOpLogger};
pub use time::{elapsed_millis, ElapsedMillis};
pub use visibility::Visibility;
