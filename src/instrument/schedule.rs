//! When to measure.
//!
//! A measurement is armed once per dataset configuration. It completes on
//! whichever comes first: an explicit render-complete signal from the
//! presentation layer, or the fallback settle timer. Each arm gets a new
//! generation so a stale timer from a superseded configuration is ignored,
//! and teardown cancels whatever is pending.

use super::{measure, DomReport, NodeProbe};
use crate::config::DEFAULT_SETTLE_DELAY_MS;

/// Where the current measurement stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementPhase {
    /// Nothing armed yet
    Idle,
    /// Waiting for render-complete or the fallback timer
    Pending { generation: u64 },
    /// Measured for the current configuration
    Reported(DomReport),
    /// Torn down before measuring
    Cancelled,
}

/// Settle state machine shared by the native harness and the browser viewer.
#[derive(Debug, Clone)]
pub struct MeasurementSchedule {
    generation: u64,
    phase: MeasurementPhase,
    settle_delay_ms: u32,
}

impl Default for MeasurementSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY_MS)
    }
}

impl MeasurementSchedule {
    pub fn new(settle_delay_ms: u32) -> Self {
        Self {
            generation: 0,
            phase: MeasurementPhase::Idle,
            settle_delay_ms,
        }
    }

    pub fn phase(&self) -> MeasurementPhase {
        self.phase
    }

    /// Fallback delay before the timer forces a measurement.
    pub fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, MeasurementPhase::Pending { .. })
    }

    /// Latest report for the current configuration.
    pub fn report(&self) -> Option<DomReport> {
        match self.phase {
            MeasurementPhase::Reported(report) => Some(report),
            _ => None,
        }
    }

    /// Arm a measurement for a new configuration.
    ///
    /// Returns the generation the fallback timer must present when it fires.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = MeasurementPhase::Pending {
            generation: self.generation,
        };
        self.generation
    }

    /// The presentation layer finished laying out; measure now.
    pub fn render_complete<P: NodeProbe + ?Sized>(&mut self, probe: &P) -> Option<DomReport> {
        if !self.is_pending() {
            return None;
        }
        Some(self.complete(probe))
    }

    /// The fallback timer for `generation` fired.
    ///
    /// Measures only if that generation is still the pending one.
    pub fn timer_fired<P: NodeProbe + ?Sized>(
        &mut self,
        generation: u64,
        probe: &P,
    ) -> Option<DomReport> {
        match self.phase {
            MeasurementPhase::Pending { generation: pending } if pending == generation => {
                tracing::debug!(generation, "settle delay elapsed; measuring");
                Some(self.complete(probe))
            }
            _ => None,
        }
    }

    /// Owner is being torn down; drop any pending measurement.
    pub fn cancel(&mut self) -> bool {
        if self.is_pending() {
            self.phase = MeasurementPhase::Cancelled;
            true
        } else {
            false
        }
    }

    fn complete<P: NodeProbe + ?Sized>(&mut self, probe: &P) -> DomReport {
        let report = measure(probe);
        self.phase = MeasurementPhase::Reported(report);
        report
    }
}
