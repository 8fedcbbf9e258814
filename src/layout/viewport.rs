//! Scroll and resize state for a virtualized table.

use super::window::{compute_window, ViewportWindow, WindowParams};

/// Scroll state plus the window derived from it.
///
/// Every setter recomputes the window and reports whether it changed, so
/// the presentation layer only re-renders when the materialized slice moves.
#[derive(Debug, Clone)]
pub struct VirtualWindow {
    params: WindowParams,
    window: ViewportWindow,
}

impl VirtualWindow {
    pub fn new(mut params: WindowParams) -> Self {
        params.scroll_offset = clamp_offset(&params, params.scroll_offset);
        let window = compute_window(&params);
        Self { params, window }
    }

    pub fn window(&self) -> &ViewportWindow {
        &self.window
    }

    pub fn scroll_offset(&self) -> f64 {
        self.params.scroll_offset
    }

    /// Set absolute scroll position, clamped to `[0, max_scroll_offset]`.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        self.params.scroll_offset = clamp_offset(&self.params, offset);
        self.recompute()
    }

    /// Resize the viewport. The scroll offset is re-clamped.
    pub fn resize(&mut self, viewport_height: f64) -> bool {
        self.params.viewport_height = viewport_height;
        self.params.scroll_offset = clamp_offset(&self.params, self.params.scroll_offset);
        self.recompute()
    }

    /// Change the row count (configuration change). The scroll offset is re-clamped.
    pub fn set_total_rows(&mut self, total_rows: usize) -> bool {
        self.params.total_rows = total_rows;
        self.params.scroll_offset = clamp_offset(&self.params, self.params.scroll_offset);
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        let next = compute_window(&self.params);
        let changed = next != self.window;
        if changed {
            tracing::trace!(
                first = next.first,
                last = next.last,
                rows = next.len,
                "window moved"
            );
        }
        self.window = next;
        changed
    }
}

fn clamp_offset(params: &WindowParams, offset: f64) -> f64 {
    if offset.is_finite() {
        offset.clamp(0.0, params.max_scroll_offset())
    } else {
        0.0
    }
}
