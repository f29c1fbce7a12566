//! The tabular data controller.

use log::{debug, warn};

use crate::config::TableConfig;
use crate::error::{ConfigError, PageError};
use crate::model::Record;
use crate::page::{PageState, total_pages};
use crate::sort::SortState;
use crate::view::View;

/// Sort and page state over a caller-owned list of records.
///
/// The controller holds no records. It tracks the record count it was last
/// told about so page movement can be clamped, and produces a [`View`] of
/// whatever slice the caller passes to [`view`](Self::view).
///
/// Movement operations return `Some((previous, new))` when the current page
/// changed and `None` when they were a no-op. Every state change bumps
/// [`revision`](Self::revision) and sets the dirty flag so a renderer knows
/// to draw a fresh view.
///
/// The controller never resets the page on its own: call
/// [`reset_page`](Self::reset_page) or
/// [`set_record_count`](Self::set_record_count) when the record set changes.
///
/// # Example
///
/// ```
/// use tabula_lib::TabularDataController;
/// use tabula_lib::model::DynamicRecord;
///
/// let records: Vec<DynamicRecord> = (1..=25i64)
///     .map(|id| DynamicRecord::new().set("id", id))
///     .collect();
///
/// let mut table = TabularDataController::new(5)
///     .unwrap()
///     .with_record_count(records.len());
/// table.go_to_page(3);
///
/// let view = table.view(&records);
/// assert_eq!(view.total_pages, 5);
/// assert_eq!((view.start_index, view.end_index), (11, 15));
/// ```
#[derive(Debug, Clone)]
pub struct TabularDataController {
    /// Active sort, `None` for input order.
    sort: Option<SortState>,
    /// Current page and page size.
    page: PageState,
    /// Record count last reported by the caller.
    record_count: usize,
    /// Allowed page sizes; empty means any size of at least 1.
    page_size_options: Vec<usize>,
    /// Incremented on every state change.
    revision: u64,
    /// Set on every state change, cleared by `take_dirty`.
    dirty: bool,
}

impl Default for TabularDataController {
    fn default() -> Self {
        let config = TableConfig::default();
        Self {
            sort: None,
            page: PageState::new(config.initial_page_size),
            record_count: 0,
            page_size_options: config.page_size_options,
            revision: 0,
            dirty: false,
        }
    }
}

impl TabularDataController {
    /// Create a controller with an initial page size and no sort.
    ///
    /// Any page size of at least 1 may be set later.
    pub fn new(page_size: usize) -> Result<Self, PageError> {
        if page_size == 0 {
            return Err(PageError::invalid_page_size(page_size));
        }
        Ok(Self {
            sort: None,
            page: PageState::new(page_size),
            record_count: 0,
            page_size_options: Vec::new(),
            revision: 0,
            dirty: false,
        })
    }

    /// Create a controller from a validated config.
    ///
    /// Page sizes outside `config.page_size_options` are rejected later.
    pub fn from_config(config: &TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sort: None,
            page: PageState::new(config.initial_page_size),
            record_count: 0,
            page_size_options: config.page_size_options.clone(),
            revision: 0,
            dirty: false,
        })
    }

    /// Set the initial record count (builder pattern).
    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Get the 1-based current page.
    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.page.page_size
    }

    /// Get the record count last reported by the caller.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Get the number of pages for the current record count.
    pub fn total_pages(&self) -> usize {
        total_pages(self.record_count, self.page.page_size)
    }

    /// Get the allowed page sizes (empty when unrestricted).
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Get the state revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check whether state changed since the last `take_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning its previous value.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Toggle sort for a field.
    ///
    /// If the field is already the sort key, toggles the direction.
    /// Otherwise sorts by the field ascending. The current page is kept.
    /// Returns the new sort state.
    pub fn set_sort(&mut self, field: &str) -> SortState {
        let sort = SortState::toggled(self.sort.as_ref(), field);
        debug!("Sort set to {} {:?}", sort.field, sort.direction);
        self.sort = Some(sort.clone());
        self.touch();
        sort
    }

    /// Clear sort state, restoring input order.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            debug!("Sort cleared");
            self.touch();
        }
    }

    // -------------------------------------------------------------------------
    // Page size
    // -------------------------------------------------------------------------

    /// Set the page size and go back to page 1.
    ///
    /// Rejects `0`, and sizes outside the configured options when there are
    /// any. On error the state is unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), PageError> {
        if page_size == 0 {
            warn!("Rejected page size {}", page_size);
            return Err(PageError::invalid_page_size(page_size));
        }
        if !self.page_size_options.is_empty() && !self.page_size_options.contains(&page_size) {
            warn!("Rejected page size {} (allowed: {:?})", page_size, self.page_size_options);
            return Err(PageError::disallowed_page_size(page_size, &self.page_size_options));
        }

        debug!("Page size {} -> {}", self.page.page_size, page_size);
        self.page.page_size = page_size;
        self.page.current_page = 1;
        self.touch();
        Ok(())
    }

    /// Set the page size from an untyped number, e.g. a select box value.
    ///
    /// Non-finite, fractional and values below 1 are rejected.
    pub fn set_page_size_value(&mut self, value: f64) -> Result<(), PageError> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > usize::MAX as f64 {
            warn!("Rejected page size {}", value);
            return Err(PageError::invalid_page_size(value));
        }
        self.set_page_size(value as usize)
    }

    // -------------------------------------------------------------------------
    // Page movement
    // -------------------------------------------------------------------------

    fn move_to(&mut self, page: usize) -> Option<(usize, usize)> {
        let previous = self.page.current_page;
        let page = page.clamp(1, self.total_pages());
        if page == previous {
            return None;
        }
        debug!("Page {} -> {}", previous, page);
        self.page.current_page = page;
        self.touch();
        Some((previous, page))
    }

    /// Go to a page, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: i64) -> Option<(usize, usize)> {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        self.move_to(page)
    }

    /// Go to a page given as an untyped number.
    ///
    /// Non-finite and fractional values are rejected; out-of-range integers
    /// are clamped like [`go_to_page`](Self::go_to_page).
    pub fn try_go_to_page(&mut self, page: f64) -> Result<Option<(usize, usize)>, PageError> {
        if !page.is_finite() || page.fract() != 0.0 {
            warn!("Rejected page index {}", page);
            return Err(PageError::invalid_page_index(page));
        }
        // Saturating cast; clamping happens in `go_to_page`.
        Ok(self.go_to_page(page as i64))
    }

    /// Move to the next page. No-op on the last page.
    pub fn next_page(&mut self) -> Option<(usize, usize)> {
        self.move_to(self.page.current_page.saturating_add(1))
    }

    /// Move to the previous page. No-op on the first page.
    pub fn previous_page(&mut self) -> Option<(usize, usize)> {
        self.move_to(self.page.current_page.saturating_sub(1))
    }

    /// Move to the first page.
    pub fn first_page(&mut self) -> Option<(usize, usize)> {
        self.move_to(1)
    }

    /// Move to the last page.
    pub fn last_page(&mut self) -> Option<(usize, usize)> {
        self.move_to(self.total_pages())
    }

    /// Go back to page 1.
    pub fn reset_page(&mut self) -> Option<(usize, usize)> {
        self.first_page()
    }

    // -------------------------------------------------------------------------
    // Records
    // -------------------------------------------------------------------------

    /// Tell the controller the record set changed size.
    ///
    /// The current page is clamped to the new page count but otherwise kept.
    /// Returns the page move if clamping changed it.
    pub fn set_record_count(&mut self, record_count: usize) -> Option<(usize, usize)> {
        if record_count == self.record_count {
            return None;
        }
        debug!("Record count {} -> {}", self.record_count, record_count);
        self.record_count = record_count;
        self.touch();
        self.move_to(self.page.current_page)
    }

    /// Compute the view of `records` for the current state.
    ///
    /// Pure: neither the records nor the controller are changed.
    pub fn view<'a, R: Record>(&self, records: &'a [R]) -> View<'a, R> {
        if records.len() != self.record_count {
            debug!(
                "View over {} records but controller tracks {}",
                records.len(),
                self.record_count
            );
        }
        View::new(records, self.sort.as_ref(), self.page)
    }
}
