//! Type-aware row sorting.
//!
//! Every cell is compared through its display string (booleans as check
//! and cross glyphs, integers in decimal), so integer columns order
//! lexicographically rather than by magnitude. Sorting never mutates the
//! dataset: it returns a new order over borrowed rows.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::collate;
use crate::dataset::{Dataset, Row};

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Current sort, or no sort at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortState(Option<SortKey>);

impl SortState {
    /// No sort applied.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self(Some(SortKey {
            column: column.into(),
            direction,
        }))
    }

    pub fn key(&self) -> Option<&SortKey> {
        self.0.as_ref()
    }

    pub fn column(&self) -> Option<&str> {
        self.0.as_ref().map(|k| k.column.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.0.as_ref().map(|k| k.direction)
    }

    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.column() == Some(column)
    }

    /// State after the user selects `column`.
    ///
    /// Selecting the active column flips its direction; selecting any other
    /// column makes it active in ascending order.
    #[must_use]
    pub fn toggle(&self, column: &str) -> Self {
        match &self.0 {
            Some(key) if key.column == column => Self::new(column, key.direction.flipped()),
            _ => Self::new(column, SortDirection::Ascending),
        }
    }
}

/// Row positions in sorted order.
///
/// Returns the identity permutation when no sort is active or the sort
/// column does not exist in the dataset.
pub fn sort_indices(dataset: &Dataset, state: &SortState) -> Vec<usize> {
    let identity = || -> Vec<usize> { (0..dataset.rows.len()).collect() };
    let Some(key) = state.key() else {
        return identity();
    };
    let Some(column_index) = dataset.column_index(&key.column) else {
        tracing::debug!(column = %key.column, "ignoring sort on unknown column");
        return identity();
    };

    let mut keyed: Vec<(usize, String)> = dataset
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let display = row.cell(column_index).map(|c| c.display()).unwrap_or_default();
            (i, display)
        })
        .collect();

    // `sort_by` is stable; descending reverses the comparator rather than
    // the output so equal keys keep their input order in both directions.
    keyed.sort_by(|(_, a), (_, b)| key.direction.apply(collate::compare(a, b)));

    tracing::debug!(
        column = %key.column,
        direction = ?key.direction,
        rows = keyed.len(),
        "sorted rows"
    );

    keyed.into_iter().map(|(i, _)| i).collect()
}

/// Rows of `dataset` in sorted order.
pub fn sort_rows<'a>(dataset: &'a Dataset, state: &SortState) -> Vec<&'a Row> {
    sort_indices(dataset, state)
        .into_iter()
        .filter_map(|i| dataset.rows.get(i))
        .collect()
}
