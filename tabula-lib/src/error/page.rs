//! PageError for controller state transitions

/// Error type for rejected page size and page index input.
///
/// The controller state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageError {
    /// Page size was zero, negative or not a finite number.
    #[error("Invalid page size: {value}")]
    InvalidPageSize { value: String },

    /// Page index was not a finite integer.
    #[error("Invalid page index: {value}")]
    InvalidPageIndex { value: String },

    /// Page size is valid but not among the configured options.
    #[error("Page size {size} is not one of the allowed options {allowed:?}")]
    DisallowedPageSize { size: usize, allowed: Vec<usize> },
}

impl PageError {
    /// Creates a new invalid page size error.
    pub fn invalid_page_size(value: impl ToString) -> Self {
        Self::InvalidPageSize {
            value: value.to_string(),
        }
    }

    /// Creates a new invalid page index error.
    pub fn invalid_page_index(value: impl ToString) -> Self {
        Self::InvalidPageIndex {
            value: value.to_string(),
        }
    }

    /// Creates a new disallowed page size error.
    pub fn disallowed_page_size(size: usize, allowed: &[usize]) -> Self {
        Self::DisallowedPageSize {
            size,
            allowed: allowed.to_vec(),
        }
    }
}
