//! Structured error types for tablebench.
//!
//! Bad input at the boundary is an error; everything past the boundary is
//! a pure computation.

/// All errors that can occur while configuring or driving a benchmark table.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Configuration rejected at the boundary (negative, non-numeric or out of range).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Path did not match any known route pattern.
    #[error("Invalid route: {0}")]
    Route(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Presentation layer failure (DOM construction, missing container).
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(target_arch = "wasm32")]
impl From<BenchError> for wasm_bindgen::JsValue {
    fn from(e: BenchError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
