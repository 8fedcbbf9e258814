//! Route patterns selecting a rendering strategy and table size.
//!
//! - `/sortable/:rowCount/:columnCount?`
//! - `/static/:rowCount/:columnCount?`
//! - `/virtualized/:rowCount/:columnCount?`
//! - `/monolith` (sortable, 10 × 10)
//!
//! A missing row count means 100 and a missing column count means 10;
//! anything non-numeric or negative is rejected here, before it can reach
//! the generator.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::config::{parse_count, BenchConfig, DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT};
use crate::error::{BenchError, Result};
use crate::table::RenderStrategy;

/// Row counts offered in the navigation bar.
pub const NAV_ROW_PRESETS: [usize; 3] = [100, 1_000, 10_000];

/// Size of the fixed monolith page.
pub const MONOLITH_SIZE: usize = 10;

/// A parsed navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub strategy: RenderStrategy,
    pub row_count: usize,
    pub column_count: usize,
    /// The fixed `/monolith` page rather than a sized strategy route
    pub monolith: bool,
}

impl Route {
    pub fn new(strategy: RenderStrategy, row_count: usize, column_count: usize) -> Self {
        Self {
            strategy,
            row_count,
            column_count,
            monolith: false,
        }
    }

    /// The fixed-size monolith page.
    pub fn monolith() -> Self {
        Self {
            monolith: true,
            ..Self::new(RenderStrategy::Sortable, MONOLITH_SIZE, MONOLITH_SIZE)
        }
    }

    /// Parse a path such as `/virtualized/1000/20`.
    ///
    /// # Errors
    /// Returns `Route` for unknown strategies or extra segments and
    /// `InvalidConfig` for bad counts.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let Some(head) = segments.next() else {
            return Err(BenchError::Route(format!("empty path {path:?}")));
        };
        if head == "monolith" {
            return match segments.next() {
                None => Ok(Self::monolith()),
                Some(extra) => Err(BenchError::Route(format!(
                    "unexpected segment {extra:?} after /monolith"
                ))),
            };
        }

        let strategy: RenderStrategy = head.parse()?;
        let row_count = segments
            .next()
            .map(|s| parse_count("rowCount", s))
            .transpose()?
            .unwrap_or(DEFAULT_ROW_COUNT);
        let column_count = segments
            .next()
            .map(|s| parse_count("columnCount", s))
            .transpose()?
            .unwrap_or(DEFAULT_COLUMN_COUNT);
        if let Some(extra) = segments.next() {
            return Err(BenchError::Route(format!(
                "unexpected segment {extra:?} in {path:?}"
            )));
        }

        Ok(Self::new(strategy, row_count, column_count))
    }

    /// Canonical path for this route.
    pub fn to_path(&self) -> String {
        if self.monolith {
            return "/monolith".to_string();
        }
        format!(
            "/{}/{}/{}",
            self.strategy.segment(),
            self.row_count,
            self.column_count
        )
    }

    /// Validated configuration with this route's counts.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when a count exceeds its limit.
    pub fn config(&self) -> Result<BenchConfig> {
        let config = BenchConfig::with_counts(self.row_count, self.column_count);
        config.validate()?;
        Ok(config)
    }

    /// Navigation presets: every strategy at each preset row count, then the monolith.
    pub fn nav_links() -> Vec<(String, Route)> {
        let mut links: Vec<(String, Route)> = RenderStrategy::ALL
            .iter()
            .flat_map(|&strategy| {
                NAV_ROW_PRESETS.iter().map(move |&rows| {
                    (
                        format!("{} ({})", strategy.label(), group_thousands(rows)),
                        Route::new(strategy, rows, DEFAULT_COLUMN_COUNT),
                    )
                })
            })
            .collect();
        links.push(("Monolith Table".to_string(), Route::monolith()));
        links
    }
}

impl FromStr for Route {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// `10000` → `10,000`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
