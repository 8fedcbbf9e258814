//! Post-render instrumentation.
//!
//! After a render settles, count the structural nodes the presentation
//! layer produced (`<th>`, `<td>`, `<tr>`) and report the total. Counting
//! is observational: a probe that cannot see a document reports zeros and
//! never fails the caller.

#[cfg(target_arch = "wasm32")]
mod dom;
mod schedule;
mod timing;

#[cfg(target_arch = "wasm32")]
pub use dom::{DocumentProbe, SettleTimer};
pub use schedule::{MeasurementPhase, MeasurementSchedule};
pub use timing::{CallbackTiming, InstantTiming, NoopTiming, TimingHook};

use serde::Serialize;
use std::fmt;

/// Structural node counts observed after a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomReport {
    pub td_count: usize,
    pub th_count: usize,
    pub tr_count: usize,
    pub total: usize,
}

impl DomReport {
    pub fn new(td_count: usize, th_count: usize, tr_count: usize) -> Self {
        Self {
            td_count,
            th_count,
            tr_count,
            total: td_count + th_count + tr_count,
        }
    }

    /// Report for a probe that could not observe anything.
    pub fn zero() -> Self {
        Self::default()
    }
}

impl fmt::Display for DomReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DOM Report → <td>: {}, <th>: {}, <tr>: {}, TOTAL: {}",
            self.td_count, self.th_count, self.tr_count, self.total
        )
    }
}

/// Something that can count rendered elements by tag.
///
/// Returns `None` when there is no rendering context to observe.
pub trait NodeProbe {
    fn count(&self, tag: &str) -> Option<usize>;
}

impl<F> NodeProbe for F
where
    F: Fn(&str) -> Option<usize>,
{
    fn count(&self, tag: &str) -> Option<usize> {
        self(tag)
    }
}

/// Probe used outside any rendering context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProbe;

impl NodeProbe for NullProbe {
    fn count(&self, _tag: &str) -> Option<usize> {
        None
    }
}

/// Count header cells, body cells and rows through `probe`.
///
/// Any unobservable count degrades the whole report to zeros.
pub fn measure<P: NodeProbe + ?Sized>(probe: &P) -> DomReport {
    let counts = (probe.count("td"), probe.count("th"), probe.count("tr"));
    let (Some(td), Some(th), Some(tr)) = counts else {
        tracing::debug!("no rendering context to measure; reporting zeros");
        return DomReport::zero();
    };
    let report = DomReport::new(td, th, tr);
    tracing::info!(
        td = report.td_count,
        th = report.th_count,
        tr = report.tr_count,
        total = report.total,
        "dom report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let report = DomReport::new(1000, 10, 101);
        assert_eq!(report.total, 1111);
    }

    #[test]
    fn test_measure_with_closure_probe() {
        let probe = |tag: &str| match tag {
            "td" => Some(30),
            "th" => Some(3),
            "tr" => Some(11),
            _ => Some(0),
        };
        assert_eq!(measure(&probe), DomReport::new(30, 3, 11));
    }

    #[test]
    fn test_measure_without_context_is_zero() {
        assert_eq!(measure(&NullProbe), DomReport::zero());
    }

    #[test]
    fn test_partial_probe_is_zero() {
        let probe = |tag: &str| (tag == "td").then_some(5);
        assert_eq!(measure(&probe), DomReport::zero());
    }

    #[test]
    fn test_display_matches_console_format() {
        let report = DomReport::new(100, 10, 11);
        assert_eq!(
            report.to_string(),
            "DOM Report → <td>: 100, <th>: 10, <tr>: 11, TOTAL: 121"
        );
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(DomReport::new(1, 2, 3)).unwrap_or_default();
        assert_eq!(json["tdCount"], 1);
        assert_eq!(json["thCount"], 2);
        assert_eq!(json["trCount"], 3);
        assert_eq!(json["total"], 6);
    }
}
