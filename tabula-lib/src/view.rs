//! Immutable view snapshots handed to renderers.

use serde::Serialize;

use crate::model::Record;
use crate::page::{PageEntry, PageState, page_range, page_window, total_pages};
use crate::sort::{SortState, sort_records};

/// Everything a renderer needs to draw one state of the table.
///
/// A view borrows the caller's records and never owns or mutates them.
/// Indices in `start_index`/`end_index` are 1-based for display; for an
/// empty record set both are `0` ("showing 0 to 0 of 0").
#[derive(Debug, Clone, Serialize)]
pub struct View<'a, R> {
    /// All records, in sorted order.
    pub sorted_records: Vec<&'a R>,
    /// Records on the current page, in sorted order.
    pub page_records: Vec<&'a R>,
    /// Number of input records.
    pub record_count: usize,
    /// 1-based current page, within `[1, total_pages]`.
    pub current_page: usize,
    /// Records per page.
    pub page_size: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// 1-based index of the first record on the page, `0` when empty.
    pub start_index: usize,
    /// 1-based index of the last record on the page, `0` when empty.
    pub end_index: usize,
    /// Page buttons to render.
    pub page_window: Vec<PageEntry>,
    /// Active sort, if any.
    pub sort: Option<SortState>,
}

impl<'a, R: Record> View<'a, R> {
    /// Computes the view of `records` for the given sort and page state.
    ///
    /// A `current_page` past the end of `records` is clamped for this view
    /// only; the caller's state is not touched.
    pub fn new(records: &'a [R], sort: Option<&SortState>, page: PageState) -> Self {
        let record_count = records.len();
        let total_pages = total_pages(record_count, page.page_size);
        let current_page = page.current_page.clamp(1, total_pages);

        let sorted_records = sort_records(records, sort);
        let range = page_range(record_count, current_page, page.page_size);
        let page_records = sorted_records[range.clone()].to_vec();

        let (start_index, end_index) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };

        log::trace!(
            "View page {}/{} rows {}..{} of {}",
            current_page,
            total_pages,
            start_index,
            end_index,
            record_count
        );

        Self {
            sorted_records,
            page_records,
            record_count,
            current_page,
            page_size: page.page_size,
            total_pages,
            start_index,
            end_index,
            page_window: page_window(total_pages, current_page),
            sort: sort.cloned(),
        }
    }
}

impl<R> View<'_, R> {
    /// Whether a previous page exists (the "prev" button is enabled).
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists (the "next" button is enabled).
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether `page` is the current page.
    pub fn is_current(&self, page: usize) -> bool {
        self.current_page == page
    }

    /// Whether there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// The "Showing X to Y of Z entries" label.
    pub fn entry_range_label(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.start_index, self.end_index, self.record_count
        )
    }
}
