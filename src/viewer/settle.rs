//! Measurement scheduling for `TableBench`.
//!
//! A measurement is armed after each configuration render. The host may
//! signal layout completion through `render_complete()`; otherwise the
//! settle timer measures after `settleDelayMs`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use super::{SharedState, TableBench};
use crate::instrument::{DocumentProbe, DomReport};

impl TableBench {
    pub(crate) fn arm_measurement(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        let generation = s.schedule.arm();
        let delay = s.schedule.settle_delay_ms();
        let scheduled = s
            .settle_timer
            .as_mut()
            .is_some_and(|timer| timer.schedule(delay, generation));
        if !scheduled {
            tracing::debug!(generation, "no settle timer; waiting for render_complete");
        }
    }

    /// The settle timer armed for `generation` fired.
    pub(crate) fn handle_settle_timeout(state: &Rc<RefCell<SharedState>>, generation: u64) {
        if let Some(timer) = state.borrow_mut().settle_timer.as_mut() {
            timer.fired();
        }
        Self::complete_measurement(state, Some(generation));
    }

    /// Measure now (explicit signal) or for a fired timer `generation`.
    pub(crate) fn complete_measurement(
        state: &Rc<RefCell<SharedState>>,
        generation: Option<u64>,
    ) -> JsValue {
        let (report, callback) = {
            let mut s = state.borrow_mut();
            let probe = DocumentProbe::scoped(s.table_el.clone());
            let report = match generation {
                Some(generation) => s.schedule.timer_fired(generation, &probe),
                None => s.schedule.render_complete(&probe),
            };
            if report.is_some() {
                if let Some(timer) = s.settle_timer.as_mut() {
                    timer.cancel();
                }
            }
            (report, s.report_callback.clone())
        };

        let Some(report) = report else {
            return JsValue::NULL;
        };
        Self::publish(report, callback.as_ref())
    }

    fn publish(report: DomReport, callback: Option<&js_sys::Function>) -> JsValue {
        web_sys::console::log_1(&JsValue::from_str(&report.to_string()));
        let value = serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL);
        if let Some(callback) = callback {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
        value
    }
}
