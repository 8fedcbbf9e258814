//! Benchmark table state.
//!
//! `BenchTable` owns the `(dataset, sort state, window)` triple for one
//! table instance. Each operation is a synchronous transition that replaces
//! the affected parts wholesale: regeneration on configuration change,
//! reordering on sort, window recomputation on scroll or resize.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::config::BenchConfig;
use crate::dataset::{self, Dataset, Row};
use crate::error::{BenchError, Result};
use crate::instrument::{DomReport, NoopTiming, TimingHook};
use crate::layout::{non_negative, ViewportWindow, VirtualWindow, WindowParams};
use crate::sort::{sort_indices, SortState};

/// How the presentation layer materializes the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStrategy {
    /// Every row rendered; header click sorts
    Sortable,
    /// Every row rendered; no interaction
    Static,
    /// Only the window around the scroll position rendered
    Virtualized,
}

impl RenderStrategy {
    pub const ALL: [RenderStrategy; 3] = [Self::Sortable, Self::Static, Self::Virtualized];

    /// Route path segment.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Sortable => "sortable",
            Self::Static => "static",
            Self::Virtualized => "virtualized",
        }
    }

    /// Human-readable name for navigation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sortable => "Sortable",
            Self::Static => "Static",
            Self::Virtualized => "Virtualized",
        }
    }

    pub fn supports_sort(self) -> bool {
        matches!(self, Self::Sortable | Self::Virtualized)
    }

    pub fn is_virtualized(self) -> bool {
        matches!(self, Self::Virtualized)
    }
}

impl FromStr for RenderStrategy {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.segment() == s)
            .ok_or_else(|| BenchError::Route(format!("unknown rendering strategy {s:?}")))
    }
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// One benchmark table instance.
pub struct BenchTable {
    config: BenchConfig,
    strategy: RenderStrategy,
    dataset: Dataset,
    sort: SortState,
    order: Vec<usize>,
    window: VirtualWindow,
    rng: StdRng,
    timing: Box<dyn TimingHook>,
}

impl BenchTable {
    /// Build a table, seeding the value generator when `seed` is given.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn new(config: BenchConfig, strategy: RenderStrategy, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, strategy, rng, Box::new(NoopTiming))
    }

    /// Build a table with an explicit random source and timing hook.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn with_rng(
        config: BenchConfig,
        strategy: RenderStrategy,
        mut rng: StdRng,
        mut timing: Box<dyn TimingHook>,
    ) -> Result<Self> {
        config.validate()?;
        timing.start("generate");
        let dataset = dataset::generate(config.row_count, config.column_count, &mut rng);
        timing.end("generate");
        let window = VirtualWindow::new(WindowParams::from_config(&config, dataset.row_count()));
        Ok(Self {
            order: (0..dataset.row_count()).collect(),
            config,
            strategy,
            dataset,
            sort: SortState::none(),
            window,
            rng,
            timing,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Row positions in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_offset()
    }

    /// Replace the timing hook.
    pub fn set_timing(&mut self, timing: Box<dyn TimingHook>) {
        self.timing = timing;
    }

    /// Hook for phases the presentation layer brackets itself.
    pub fn timing(&mut self) -> &mut dyn TimingHook {
        self.timing.as_mut()
    }

    /// Regenerate for new counts. Resets the sort.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the counts are out of range; the table is
    /// left unchanged in that case.
    pub fn reconfigure(&mut self, row_count: usize, column_count: usize) -> Result<()> {
        let config = BenchConfig {
            row_count,
            column_count,
            ..self.config.clone()
        };
        config.validate()?;

        self.timing.start("generate");
        let dataset = dataset::generate(row_count, column_count, &mut self.rng);
        self.timing.end("generate");

        self.order = (0..dataset.row_count()).collect();
        self.dataset = dataset;
        self.sort = SortState::none();
        self.config = config;
        self.window.set_total_rows(row_count);
        tracing::info!(rows = row_count, columns = column_count, "table reconfigured");
        Ok(())
    }

    /// Apply a header selection on `column`.
    ///
    /// Returns `false` (and changes nothing) when the strategy does not sort
    /// or the column does not exist.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        if !self.strategy.supports_sort() {
            return false;
        }
        if self.dataset.column_index(column).is_none() {
            tracing::debug!(column, "sort requested on unknown column");
            return false;
        }
        let sort = self.sort.toggle(column);
        self.timing.start("sort");
        self.order = sort_indices(&self.dataset, &sort);
        self.timing.end("sort");
        self.sort = sort;
        true
    }

    /// Returns whether the materialized slice changed.
    pub fn scroll_to(&mut self, offset: f64) -> bool {
        self.window.set_scroll_offset(offset) && self.strategy.is_virtualized()
    }

    /// Returns whether the materialized slice changed.
    ///
    /// Negative or non-finite heights are stored as zero.
    pub fn resize(&mut self, viewport_height: f64) -> bool {
        let viewport_height = non_negative(viewport_height);
        self.config.viewport_height = viewport_height;
        self.window.resize(viewport_height) && self.strategy.is_virtualized()
    }

    /// Window the presentation layer should render.
    ///
    /// Full strategies materialize every row with no filler.
    pub fn render_window(&self) -> ViewportWindow {
        if self.strategy.is_virtualized() {
            return *self.window.window();
        }
        match self.dataset.row_count().checked_sub(1) {
            None => ViewportWindow::empty(),
            Some(last) => ViewportWindow {
                first: 0,
                last,
                leading_filler: 0.0,
                trailing_filler: 0.0,
                len: last + 1,
            },
        }
    }

    /// Display positions of the rows to materialize.
    pub fn materialized_range(&self) -> Range<usize> {
        self.render_window().indices()
    }

    /// Rows to materialize, in display order.
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.order
            .get(self.materialized_range())
            .unwrap_or_default()
            .iter()
            .filter_map(|&i| self.dataset.rows.get(i))
            .collect()
    }

    /// All rows in display order.
    pub fn sorted_rows(&self) -> Vec<&Row> {
        self.order
            .iter()
            .filter_map(|&i| self.dataset.rows.get(i))
            .collect()
    }

    /// Node counts a conforming renderer produces for the current state.
    ///
    /// One header row of `<th>` per column, one `<tr>` of `<td>` per
    /// materialized row, and for each non-zero filler one `<tr>` holding a
    /// single spanning `<td>`.
    pub fn predicted_report(&self) -> DomReport {
        let window = self.render_window();
        let columns = self.dataset.column_count();
        let fillers = usize::from(window.leading_filler > 0.0)
            + usize::from(window.trailing_filler > 0.0);
        DomReport::new(
            window.len * columns + fillers,
            columns,
            1 + window.len + fillers,
        )
    }
}
