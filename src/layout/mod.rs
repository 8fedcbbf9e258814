//! Virtualized row windowing.
//!
//! This module handles:
//! - Computing which rows to materialize for a scroll position
//! - Filler extents that keep total scroll height consistent
//! - Scroll/resize state that recomputes the window only on change

mod viewport;
mod window;

pub use viewport::VirtualWindow;
pub use window::{compute_window, non_negative, ViewportWindow, WindowParams};
