//! Benchmark configuration.
//!
//! Every option has a default so callers (JS, CLI, routes) can supply a
//! partial configuration. Validation happens here, at the boundary, so the
//! generator and window calculator never see out-of-range values.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Default number of generated rows.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Default number of generated columns.
pub const DEFAULT_COLUMN_COUNT: usize = 10;

/// Default rows materialized above and below the visible range.
pub const DEFAULT_OVERSCAN: usize = 10;

/// Default estimated row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 40.0;

/// Default header row height in pixels.
pub const DEFAULT_HEADER_HEIGHT: f64 = 48.0;

/// Default scroll container height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Fallback wait (ms) before measuring rendered output.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 1000;

/// Largest row count accepted at the boundary.
pub const MAX_ROWS: usize = 100_000;

/// Largest column count accepted at the boundary.
pub const MAX_COLUMNS: usize = 1_000;

/// Recognized benchmark options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchConfig {
    pub row_count: usize,
    pub column_count: usize,
    pub overscan: usize,
    pub row_height_estimate: f64,
    pub header_height: f64,
    pub viewport_height: f64,
    pub settle_delay_ms: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            overscan: DEFAULT_OVERSCAN,
            row_height_estimate: DEFAULT_ROW_HEIGHT,
            header_height: DEFAULT_HEADER_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl BenchConfig {
    /// Config with the given counts and defaults for everything else.
    pub fn with_counts(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON object and validate it.
    ///
    /// # Errors
    /// Returns `Json` for malformed input (including negative or
    /// non-numeric counts) and `InvalidConfig` for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every option against its documented range.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        if self.row_count > MAX_ROWS {
            return Err(BenchError::InvalidConfig(format!(
                "rowCount {} exceeds maximum {MAX_ROWS}",
                self.row_count
            )));
        }
        if self.column_count > MAX_COLUMNS {
            return Err(BenchError::InvalidConfig(format!(
                "columnCount {} exceeds maximum {MAX_COLUMNS}",
                self.column_count
            )));
        }
        positive("rowHeightEstimate", self.row_height_estimate)?;
        positive("headerHeight", self.header_height)?;
        if !self.viewport_height.is_finite() || self.viewport_height < 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "viewportHeight must be a non-negative number, got {}",
                self.viewport_height
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BenchError::InvalidConfig(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

/// Parse a count from user input (route segment, CLI flag).
///
/// Accepts only non-negative decimal integers; signs, fractions and
/// anything non-numeric are rejected rather than truncated.
///
/// # Errors
/// Returns `InvalidConfig` when the text is not a valid count.
pub fn parse_count(name: &str, text: &str) -> Result<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BenchError::InvalidConfig(format!(
            "{name} must be a non-negative integer, got {text:?}"
        )));
    }
    trimmed
        .parse::<usize>()
        .map_err(|e| BenchError::InvalidConfig(format!("{name} {text:?}: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.row_count, 100);
        assert_eq!(config.column_count, 10);
        assert_eq!(config.overscan, 10);
        assert_eq!(config.row_height_estimate, 40.0);
        assert_eq!(config.header_height, 48.0);
        assert_eq!(config.settle_delay_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BenchConfig::from_json(r#"{"rowCount": 1000}"#).unwrap();
        assert_eq!(config.row_count, 1000);
        assert_eq!(config.column_count, DEFAULT_COLUMN_COUNT);
        assert_eq!(config.overscan, DEFAULT_OVERSCAN);
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = BenchConfig::from_json(r#"{"rowCount": -5}"#).unwrap_err();
        assert!(matches!(err, BenchError::Json(_)));
    }

    #[test]
    fn test_non_numeric_count_rejected() {
        assert!(BenchConfig::from_json(r#"{"columnCount": "ten"}"#).is_err());
    }

    #[test]
    fn test_zero_row_height_rejected() {
        let config = BenchConfig {
            row_height_estimate: 0.0,
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_too_many_rows_rejected() {
        let config = BenchConfig::with_counts(MAX_ROWS + 1, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("rowCount", "1000").unwrap(), 1000);
        assert_eq!(parse_count("rowCount", " 0 ").unwrap(), 0);
        assert!(parse_count("rowCount", "-1").is_err());
        assert!(parse_count("rowCount", "1.5").is_err());
        assert!(parse_count("rowCount", "abc").is_err());
        assert!(parse_count("rowCount", "").is_err());
    }
}
