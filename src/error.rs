//! Error types for fexplorer
//!
//! Browsing itself never fails: missing or unreadable directories fold into
//! empty listings. These errors cover everything around the browsing core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logger already initialized")]
    LoggerInit,

    #[error("Listing worker unavailable: {0}")]
    WorkerUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
