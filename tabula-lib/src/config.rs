//! Table configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Default records per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Default page size choices offered by the size selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Caller-supplied paging configuration.
///
/// Missing keys fall back to the defaults, so `{}` is a valid document.
///
/// # Example
///
/// ```
/// use tabula_lib::config::TableConfig;
///
/// let config = TableConfig::from_json_str(r#"{ "initial_page_size": 10 }"#).unwrap();
/// assert_eq!(config.initial_page_size, 10);
/// assert_eq!(config.page_size_options, vec![5, 10, 20, 50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size the controller starts with.
    pub initial_page_size: usize,
    /// Page sizes the caller may switch between.
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl TableConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded table config from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Checks the options are non-empty and positive, and that the initial
    /// size is one of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if let Some(&zero) = self.page_size_options.iter().find(|&&size| size == 0) {
            return Err(ConfigError::InvalidPageSizeOption(zero));
        }
        if !self.page_size_options.contains(&self.initial_page_size) {
            return Err(ConfigError::InitialPageSizeNotAllowed {
                initial: self.initial_page_size,
                options: self.page_size_options.clone(),
            });
        }
        Ok(())
    }
}
