//! Error types for dactylo.

use thiserror::Error;

/// The practice corpus cannot produce a reference text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("practice corpus is empty")]
    EmptyCorpus,
}

#[derive(Error, Debug)]
pub enum DactyloError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, DactyloError>;
