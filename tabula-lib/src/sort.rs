//! Sort state and stable record sorting.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies this direction to an ascending ordering.
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active sort: which field and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Field name records are compared by.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Creates an ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Computes the sort state after a header toggle on `field`.
    ///
    /// If `field` is already the sort key the direction flips, otherwise
    /// `field` becomes the key in ascending order. There is no third
    /// "unsorted" state.
    pub fn toggled(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(sort) if sort.field == field => SortState {
                field: sort.field.clone(),
                direction: sort.direction.flipped(),
            },
            _ => SortState::ascending(field),
        }
    }

    /// Compares two records on this sort's field and direction.
    pub fn compare<R: Record + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        let left = a.field_or_null(&self.field);
        let right = b.field_or_null(&self.field);
        self.direction.apply(left.compare(&right))
    }
}

/// Returns the records in sorted order without touching the input.
///
/// With no sort the input order is returned. `slice::sort_by` is a stable
/// sort, so records comparing equal keep their relative input order.
pub fn sort_records<'a, R: Record>(records: &'a [R], sort: Option<&SortState>) -> Vec<&'a R> {
    let mut sorted: Vec<&R> = records.iter().collect();
    if let Some(sort) = sort {
        sorted.sort_by(|a, b| sort.compare(*a, *b));
    }
    sorted
}
