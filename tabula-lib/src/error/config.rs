//! ConfigError for table configuration loading

use std::path::PathBuf;

/// Error type for loading and validating a [`TableConfig`](crate::config::TableConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid JSON for a table config.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The page size option list is empty.
    #[error("At least one page size option is required")]
    NoPageSizeOptions,

    /// A page size option is zero.
    #[error("Page size options must be at least 1, got {0}")]
    InvalidPageSizeOption(usize),

    /// The initial page size is not one of the options.
    #[error("Initial page size {initial} is not one of the options {options:?}")]
    InitialPageSizeNotAllowed { initial: usize, options: Vec<usize> },
}
