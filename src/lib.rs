//! tablebench - table rendering benchmark harness
//!
//! Renders large synthetic tables (100–10,000 rows, 10–100 columns) with
//! different strategies and measures how many DOM nodes each produces:
//! - Seedable synthetic datasets with mixed cell types
//! - Stable, display-string sort across heterogeneous columns
//! - Virtualized row windows with overscan and filler extents
//! - Post-render DOM size reports with a settle fallback
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableBench } from 'tablebench';
//! await init();
//! const bench = new TableBench(document.body, '/virtualized/10000/20');
//! bench.on_report((report) => console.log(report.total));
//! requestAnimationFrame(() => bench.render_complete());
//! ```

pub mod collate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod instrument;
pub mod layout;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod route;
pub mod sort;
pub mod table;

// Browser viewer (DOM rendering + instrumentation)
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::TableBench;

pub use config::BenchConfig;
pub use dataset::{generate, generate_seeded, CellValue, Column, Dataset, Row, RowId};
pub use error::BenchError;
pub use instrument::DomReport;
pub use layout::{compute_window, ViewportWindow, VirtualWindow, WindowParams};
pub use route::Route;
pub use sort::{sort_rows, SortDirection, SortState};
pub use table::{BenchTable, RenderStrategy};

/// Generate a dataset and return it as a JSON string
///
/// `{ "columns": [...], "rows": [{ "id": "row-0", "Column 1": ... }] }`
///
/// # Errors
/// Returns an error if the counts exceed the configured limits.
#[wasm_bindgen]
pub fn generate_dataset(
    row_count: usize,
    column_count: usize,
    seed: Option<u64>,
) -> std::result::Result<String, JsValue> {
    BenchConfig::with_counts(row_count, column_count)
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let dataset = match seed {
        Some(seed) => generate_seeded(row_count, column_count, seed),
        None => generate(row_count, column_count, &mut rand::thread_rng()),
    };
    serde_json::to_string(&dataset)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Compute the visible row window and return it as a `JsValue`
///
/// # Errors
/// Returns an error if the window cannot be serialized.
#[wasm_bindgen]
pub fn visible_window(
    total_rows: usize,
    row_height_estimate: f64,
    header_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
    overscan: usize,
) -> std::result::Result<JsValue, JsValue> {
    let window = compute_window(&WindowParams {
        total_rows,
        row_height_estimate,
        header_height,
        viewport_height,
        scroll_offset,
        overscan,
    });
    serde_wasm_bindgen::to_value(&window)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Parse a route path into `{ strategy, rowCount, columnCount }`
///
/// # Errors
/// Returns an error for unknown strategies or invalid counts.
#[wasm_bindgen]
pub fn parse_route(path: &str) -> std::result::Result<JsValue, JsValue> {
    let route = Route::parse(path).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&route)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
