//! Visible row window under a uniform row height estimate.
//!
//! Row positions are `index * row_height_estimate`; nothing here looks at
//! measured layout, so rendered rows that differ from the estimate drift
//! without correction.

use serde::Serialize;
use std::ops::Range;

use crate::config::{BenchConfig, DEFAULT_ROW_HEIGHT};

/// Inputs to [`compute_window`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowParams {
    pub total_rows: usize,
    pub row_height_estimate: f64,
    pub header_height: f64,
    pub viewport_height: f64,
    pub scroll_offset: f64,
    pub overscan: usize,
}

impl WindowParams {
    /// Window inputs for `total_rows` rows at the top of the scroll range.
    pub fn from_config(config: &BenchConfig, total_rows: usize) -> Self {
        Self {
            total_rows,
            row_height_estimate: config.row_height_estimate,
            header_height: config.header_height,
            viewport_height: config.viewport_height,
            scroll_offset: 0.0,
            overscan: config.overscan,
        }
    }

    /// Row height, falling back to the default for non-positive estimates.
    pub fn row_height(&self) -> f64 {
        if self.row_height_estimate.is_finite() && self.row_height_estimate > 0.0 {
            self.row_height_estimate
        } else {
            DEFAULT_ROW_HEIGHT
        }
    }

    /// Estimated height of all body rows.
    pub fn content_height(&self) -> f64 {
        self.total_rows as f64 * self.row_height()
    }

    /// Body rows plus the header row.
    pub fn scroll_height(&self) -> f64 {
        self.content_height() + non_negative(self.header_height)
    }

    /// Largest scroll offset that still shows content.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_height() - non_negative(self.viewport_height)).max(0.0)
    }
}

/// Rows to materialize plus the filler extents around them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportWindow {
    /// First materialized row (inclusive)
    pub first: usize,
    /// Last materialized row (inclusive); meaningless when `len == 0`
    pub last: usize,
    /// Height reserved above `first`
    pub leading_filler: f64,
    /// Height reserved below `last`
    pub trailing_filler: f64,
    /// Number of materialized rows
    pub len: usize,
}

impl ViewportWindow {
    /// Window over an empty dataset.
    pub const fn empty() -> Self {
        Self {
            first: 0,
            last: 0,
            leading_filler: 0.0,
            trailing_filler: 0.0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Materialized row indices as a half-open range.
    pub fn indices(&self) -> Range<usize> {
        self.first..self.first + self.len
    }
}

impl Default for ViewportWindow {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the contiguous range of rows that must be materialized.
///
/// `first = max(0, floor(scroll / h) - overscan)` and
/// `last = min(total - 1, first + ceil(viewport / h) + 2 * overscan)`.
/// `first` is additionally clamped to the last row so scrolling past the
/// end still yields a valid window.
pub fn compute_window(params: &WindowParams) -> ViewportWindow {
    let total = params.total_rows;
    let Some(last_row) = total.checked_sub(1) else {
        return ViewportWindow::empty();
    };

    let row_height = params.row_height();
    let scroll = non_negative(params.scroll_offset);
    let viewport = non_negative(params.viewport_height);
    let overscan = params.overscan;

    let first = to_index((scroll / row_height).floor())
        .saturating_sub(overscan)
        .min(last_row);
    let visible = to_index((viewport / row_height).ceil());
    let last = first
        .saturating_add(visible)
        .saturating_add(overscan.saturating_mul(2))
        .min(last_row);

    ViewportWindow {
        first,
        last,
        leading_filler: first as f64 * row_height,
        trailing_filler: (last_row - last) as f64 * row_height,
        len: last - first + 1,
    }
}

/// Finite and non-negative, or zero.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Convert a non-negative, already floored/ceiled value to an index.
/// Float-to-int `as` saturates, so huge offsets map to `usize::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_index(value: f64) -> usize {
    value.max(0.0) as usize
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn params(total_rows: usize, viewport: f64, scroll: f64, overscan: usize) -> WindowParams {
        WindowParams {
            total_rows,
            row_height_estimate: 40.0,
            header_height: 48.0,
            viewport_height: viewport,
            scroll_offset: scroll,
            overscan,
        }
    }

    #[test]
    fn test_window_at_top() {
        let w = compute_window(&params(1000, 600.0, 0.0, 10));
        assert_eq!(w.first, 0);
        assert_eq!(w.last, 35);
        assert_eq!(w.leading_filler, 0.0);
        assert_eq!(w.trailing_filler, (999 - 35) as f64 * 40.0);
    }

    #[test]
    fn test_window_mid_scroll() {
        let w = compute_window(&params(1000, 600.0, 4000.0, 10));
        assert_eq!(w.first, 90);
        assert_eq!(w.last, 125);
        assert_eq!(w.len, 36);
        assert_eq!(w.leading_filler, 3600.0);
    }

    #[test]
    fn test_empty_dataset() {
        let w = compute_window(&params(0, 600.0, 100.0, 10));
        assert!(w.is_empty());
        assert_eq!(w.leading_filler, 0.0);
        assert_eq!(w.trailing_filler, 0.0);
        assert_eq!(w.indices(), 0..0);
    }

    #[test]
    fn test_zero_viewport_bounded_by_overscan() {
        let w = compute_window(&params(1000, 0.0, 4000.0, 3));
        assert_eq!(w.first, 97);
        assert_eq!(w.len, 3 * 2 + 1);
    }

    #[test]
    fn test_scroll_past_end_clamps_first() {
        let w = compute_window(&params(10, 600.0, 1_000_000.0, 2));
        assert_eq!(w.first, 9);
        assert_eq!(w.last, 9);
        assert_eq!(w.trailing_filler, 0.0);
    }

    #[test]
    fn test_negative_and_nan_scroll_treated_as_zero() {
        assert_eq!(compute_window(&params(100, 600.0, -50.0, 0)).first, 0);
        assert_eq!(compute_window(&params(100, 600.0, f64::NAN, 0)).first, 0);
    }

    #[test]
    fn test_fillers_cover_content_height() {
        let p = params(500, 600.0, 1234.0, 5);
        let w = compute_window(&p);
        let materialized = w.len as f64 * p.row_height_estimate;
        assert_eq!(
            w.leading_filler + materialized + w.trailing_filler,
            p.content_height()
        );
    }

    #[test]
    fn test_invalid_row_height_uses_default() {
        let mut p = params(100, 600.0, 0.0, 0);
        p.row_height_estimate = 0.0;
        assert_eq!(p.row_height(), DEFAULT_ROW_HEIGHT);
        assert_eq!(compute_window(&p).last, 15);
    }
}
