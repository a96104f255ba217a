//! Example of using the refmeta-core loggers directly from Rust.

use std::sync::Arc;
use std::time::Instant;

use refmeta_core::log::{ConsoleLogger, FactoryLogger, Logger, TracingLoggerFactory};
use refmeta_core::logging::{init_logging, LoggingOptions};
use refmeta_core::{digit_count, log_error, log_info, ElapsedMillis, LogLevel, Visibility};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    // 1. Console logger with default colors
    let mut console = ConsoleLogger::new();
    let width = digit_count(i64::MIN, true);
    log_info!(console, "example", "{} is {} characters wide", i64::MIN, width);
    console.log_debug(Some("example"), "debug records are dark gray");
    console.log_warning(Some("example"), "warnings are yellow");
    console.log_error(Some("example"), None, None);

    // 2. Faults carry their own context instead of a stack trace
    let fault = anyhow::anyhow!("member table truncated").context("loading metadata");
    log_error!(console, "example", fault = &fault, "visibility was {}", Visibility::default());

    // 3. Turn the error stack trace off
    console.config_mut().set_log_stack_trace(LogLevel::Error, false);
    console.log_error(Some("example"), None, Some("no stack trace this time"));

    // 4. Route the same calls through tracing, one sub-logger per source
    let guard = init_logging(&LoggingOptions::default().with_default_directive("debug"))?;
    let logger: Arc<dyn Logger> = Arc::new(FactoryLogger::new(
        Arc::new(TracingLoggerFactory::with_guard(guard)),
        true,
    ));
    logger.log_info(Some("scanner"), "routed through tracing");
    logger.log_warning(None, "no source goes to the default channel");

    println!("Finished in {:.3} ms", started.elapsed_millis());
    Ok(())
}
