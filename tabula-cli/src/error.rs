//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

use tabula_lib::error::{ConfigError, PageError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Page(#[from] PageError),
    #[error("failed to open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("failed to encode view: {0}")]
    Json(#[from] serde_json::Error),
}
