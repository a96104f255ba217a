//! Error types for refmeta-core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefmetaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(String),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),

    #[error("Unknown visibility: {0}")]
    UnknownVisibility(String),
}

pub type Result<T> = std::result::Result<T, RefmetaError>;
