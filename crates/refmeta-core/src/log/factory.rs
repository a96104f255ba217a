//! Logger that forwards to an injected [`LoggerFactory`].
//!
//! One sub-logger is created per distinct source tag, on first use, and kept
//! for the lifetime of the [`FactoryLogger`]. The cache lookup and insertion
//! run under a single mutex so concurrent first calls for the same tag create
//! exactly one sub-logger.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::log::{LogLevel, Logger, LoggerFactory, SubLogger};

/// Namespace prefixed to every per-source sub-logger name.
pub const DEFAULT_NAMESPACE: &str = "refmeta";

/// Sub-logger name used when a call carries no source tag.
pub const DEFAULT_CHANNEL: &str = "default";

/// [`Logger`] implementation backed by a host-supplied [`LoggerFactory`].
///
/// When built with `dispose_factory = true` the factory is considered owned and
/// its [`LoggerFactory::shutdown`] runs when this logger is dropped. Otherwise
/// dropping leaves the factory alone.
pub struct FactoryLogger {
    factory: Arc<dyn LoggerFactory>,
    dispose_factory: bool,
    namespace: String,
    default_logger: OnceLock<Arc<dyn SubLogger>>,
    loggers: Mutex<HashMap<String, Arc<dyn SubLogger>>>,
}

impl FactoryLogger {
    pub fn new(factory: Arc<dyn LoggerFactory>, dispose_factory: bool) -> Self {
        Self {
            factory,
            dispose_factory,
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_logger: OnceLock::new(),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolve the sub-logger for `source`, creating and caching it on first use.
    pub fn sub_logger(&self, source: Option<&str>) -> Arc<dyn SubLogger> {
        let Some(source) = source else {
            return Arc::clone(
                self.default_logger
                    .get_or_init(|| self.factory.create_logger(DEFAULT_CHANNEL)),
            );
        };

        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(logger) = loggers.get(source) {
            return Arc::clone(logger);
        }

        let name = format!("{}::{}", self.namespace, source);
        debug!(logger = %name, "Creating sub-logger");
        let logger = self.factory.create_logger(&name);
        loggers.insert(source.to_string(), Arc::clone(&logger));
        logger
    }

    /// Source tags that currently have a cached sub-logger, sorted.
    pub fn cached_sources(&self) -> Vec<String> {
        let loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        let mut sources: Vec<String> = loggers.keys().cloned().collect();
        sources.sort();
        sources
    }
}

impl Logger for FactoryLogger {
    fn log_debug(&self, source: Option<&str>, message: &str) {
        self.sub_logger(source).log(LogLevel::Debug, None, Some(message));
    }

    fn log_info(&self, source: Option<&str>, message: &str) {
        self.sub_logger(source).log(LogLevel::Info, None, Some(message));
    }

    fn log_warning(&self, source: Option<&str>, message: &str) {
        self.sub_logger(source).log(LogLevel::Warning, None, Some(message));
    }

    fn log_error(
        &self,
        source: Option<&str>,
        fault: Option<&anyhow::Error>,
        message: Option<&str>,
    ) {
        self.sub_logger(source).log(LogLevel::Error, fault, message);
    }
}

impl Drop for FactoryLogger {
    fn drop(&mut self) {
        if self.dispose_factory {
            debug!(namespace = %self.namespace, "Shutting down owned logger factory");
            self.factory.shutdown();
        }
    }
}

impl std::fmt::Debug for FactoryLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryLogger")
            .field("namespace", &self.namespace)
            .field("dispose_factory", &self.dispose_factory)
            .field("cached_sources", &self.cached_sources())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    type Record = (String, LogLevel, Option<String>, Option<String>);

    #[derive(Default)]
    struct RecordingFactory {
        created: Mutex<Vec<String>>,
        records: Arc<Mutex<Vec<Record>>>,
        shutdowns: AtomicUsize,
    }

    struct RecordingSubLogger {
        name: String,
        records: Arc<Mutex<Vec<Record>>>,
    }

    impl SubLogger for RecordingSubLogger {
        fn log(&self, level: LogLevel, fault: Option<&anyhow::Error>, message: Option<&str>) {
            self.records.lock().unwrap().push((
                self.name.clone(),
                level,
                fault.map(|e| e.to_string()),
                message.map(str::to_string),
            ));
        }
    }

    impl LoggerFactory for RecordingFactory {
        fn create_logger(&self, name: &str) -> Arc<dyn SubLogger> {
            self.created.lock().unwrap().push(name.to_string());
            Arc::new(RecordingSubLogger {
                name: name.to_string(),
                records: Arc::clone(&self.records),
            })
        }

        fn shutdown(&self) {
            self.shutdowns.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_forwards_with_mapped_level_and_scoped_name() {
        let factory = Arc::new(RecordingFactory::default());
        let logger = FactoryLogger::new(factory.clone(), false);

        logger.log_debug(Some("scanner"), "d");
        logger.log_info(Some("scanner"), "i");
        logger.log_warning(Some("scanner"), "w");
        logger.log_error(Some("scanner"), Some(&anyhow::anyhow!("boom")), Some("e"));

        let records = factory.records.lock().unwrap().clone();
        let levels: Vec<_> = records.iter().map(|r| r.1).collect();
        assert_eq!(levels, LogLevel::ALL);
        assert!(records.iter().all(|r| r.0 == "refmeta::scanner"));
        assert_eq!(records[3].2.as_deref(), Some("boom"));
        assert_eq!(records[3].3.as_deref(), Some("e"));
    }

    #[test]
    fn test_sub_logger_is_cached_per_source() {
        let factory = Arc::new(RecordingFactory::default());
        let logger = FactoryLogger::new(factory.clone(), false).with_namespace("app");

        logger.log_info(Some("a"), "1");
        logger.log_info(Some("b"), "2");
        logger.log_info(Some("a"), "3");

        assert_eq!(*factory.created.lock().unwrap(), ["app::a", "app::b"]);
        assert_eq!(logger.cached_sources(), ["a", "b"]);
    }

    #[test]
    fn test_missing_source_uses_default_channel() {
        let factory = Arc::new(RecordingFactory::default());
        let logger = FactoryLogger::new(factory.clone(), false);

        logger.log_info(None, "x");
        logger.log_error(None, None, Some("y"));

        assert_eq!(*factory.created.lock().unwrap(), [DEFAULT_CHANNEL]);
        assert!(logger.cached_sources().is_empty());
    }

    #[test]
    fn test_drop_shuts_down_owned_factory_only() {
        let factory = Arc::new(RecordingFactory::default());

        drop(FactoryLogger::new(factory.clone(), false));
        assert_eq!(factory.shutdowns.load(Ordering::SeqCst), 0);

        drop(FactoryLogger::new(factory.clone(), true));
        assert_eq!(factory.shutdowns.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_use_creates_one_sub_logger() {
        struct SlowFactory {
            creations: AtomicUsize,
            started: AtomicBool,
        }

        impl LoggerFactory for SlowFactory {
            fn create_logger(&self, _name: &str) -> Arc<dyn SubLogger> {
                self.started.store(true, Ordering::SeqCst);
                self.creations.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(std::time::Duration::from_millis(20));
                Arc::new(Silent)
            }
        }

        struct Silent;
        impl SubLogger for Silent {
            fn log(&self, _: LogLevel, _: Option<&anyhow::Error>, _: Option<&str>) {}
        }

        let factory = Arc::new(SlowFactory {
            creations: AtomicUsize::new(0),
            started: AtomicBool::new(false),
        });
        let logger = Arc::new(FactoryLogger::new(factory.clone(), false));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || logger.log_info(Some("shared"), &format!("call {i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(factory.started.load(Ordering::SeqCst));
        assert_eq!(factory.creations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_factory_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FactoryLogger>();
    }
}
