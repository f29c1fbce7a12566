//! Page state, page counts and the page-number window.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// Current page and page size.
///
/// Both are 1-based / positive. `current_page` is kept within
/// `[1, total_pages]` by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based current page.
    pub current_page: usize,
    /// Records per page, at least 1.
    pub page_size: usize,
}

impl PageState {
    /// Creates a page state on page 1.
    ///
    /// A zero `page_size` is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }
}

/// Number of pages needed for `record_count` records.
///
/// An empty record set still has one (empty) page.
pub fn total_pages(record_count: usize, page_size: usize) -> usize {
    record_count.div_ceil(page_size.max(1)).max(1)
}

/// 0-based index range of the records on `page`, clamped to `record_count`.
pub fn page_range(record_count: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(record_count);
    let end = start.saturating_add(page_size).min(record_count);
    start..end
}

/// One entry of the page-number window.
///
/// Serializes as a bare number for pages and `"…"` for ellipses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A page button.
    Page(usize),
    /// A spacer standing for one or more hidden pages.
    Ellipsis,
}

impl PageEntry {
    /// Text shown for an ellipsis spacer.
    pub const ELLIPSIS: &'static str = "…";
}

impl std::fmt::Display for PageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{}", n),
            PageEntry::Ellipsis => f.write_str(Self::ELLIPSIS),
        }
    }
}

impl Serialize for PageEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n as u64),
            PageEntry::Ellipsis => serializer.serialize_str(Self::ELLIPSIS),
        }
    }
}

impl<'de> Deserialize<'de> for PageEntry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Page(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Page(n) => Ok(PageEntry::Page(n)),
            Raw::Text(text) if text == Self::ELLIPSIS => Ok(PageEntry::Ellipsis),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a page number or \"{}\", got \"{}\"",
                Self::ELLIPSIS,
                text
            ))),
        }
    }
}

/// Computes which page buttons to show.
///
/// This is a fixed lookup, not a sliding window:
///
/// | case                 | window                 |
/// |----------------------|------------------------|
/// | `total <= 3`         | `1 ..= total`          |
/// | `current == 1`       | `1 2 … T`              |
/// | `current == T`       | `1 … T-1 T`            |
/// | `current == 2`       | `1 2 3 … T`            |
/// | `current == T-1`     | `1 … T-1 T`            |
/// | otherwise            | `1 … C … T`            |
///
/// Interior pages do not show their neighbours.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<PageEntry> {
    use PageEntry::{Ellipsis, Page};

    let t = total_pages;
    let c = current_page;

    if t <= 3 {
        return (1..=t).map(Page).collect();
    }

    if c == 1 {
        vec![Page(1), Page(2), Ellipsis, Page(t)]
    } else if c == t {
        vec![Page(1), Ellipsis, Page(t - 1), Page(t)]
    } else if c == 2 {
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(t)]
    } else if c == t - 1 {
        vec![Page(1), Ellipsis, Page(t - 1), Page(t)]
    } else {
        vec![Page(1), Ellipsis, Page(c), Ellipsis, Page(t)]
    }
}
