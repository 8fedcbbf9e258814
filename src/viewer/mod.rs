//! Browser viewer - the wasm-exported `TableBench` entry point.
//!
//! This module provides the `TableBench` struct that handles:
//! - Mounting a scroll container and `<table>` into a host element
//! - Re-rendering on scroll (virtualized strategy) and header clicks
//! - Arming one DOM measurement per configuration and reporting it
//!
//! Scroll and click listeners are registered when the viewer is created and
//! removed in [`TableBench::destroy`] (also run on drop).

mod events;
mod render;
mod settle;

use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlDivElement, HtmlElement, MouseEvent};

use crate::error::BenchError;
use crate::instrument::{InstantTiming, MeasurementSchedule, SettleTimer};
use crate::route::Route;
use crate::table::BenchTable;

/// Timing label for the first render after mounting.
const INITIAL_RENDER: &str = "initial render";

/// State shared between the exported struct and its event closures.
pub(crate) struct SharedState {
    pub(crate) table: BenchTable,
    pub(crate) schedule: MeasurementSchedule,
    pub(crate) settle_timer: Option<SettleTimer>,
    pub(crate) document: Document,
    pub(crate) scroll_container: HtmlDivElement,
    pub(crate) table_el: Element,
    pub(crate) report_callback: Option<Function>,
}

/// The benchmark table exported to JavaScript.
#[wasm_bindgen]
pub struct TableBench {
    state: Rc<RefCell<SharedState>>,
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
    click_closure: Option<Closure<dyn FnMut(MouseEvent)>>,
}

#[wasm_bindgen]
impl TableBench {
    /// Mount a table for `route` (e.g. `/virtualized/10000/20`) inside `parent`.
    ///
    /// # Errors
    /// Returns an error for an invalid route or when the DOM is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(parent: HtmlElement, route: &str, seed: Option<u64>) -> Result<TableBench, JsValue> {
        console_error_panic_hook::set_once();

        let route = Route::parse(route)?;
        let config = route.config()?;
        let mut table = BenchTable::new(config, route.strategy, seed)?;
        table.set_timing(Box::new(InstantTiming::new()));

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| BenchError::Render("no document available".into()))?;

        let scroll_container = document
            .create_element("div")?
            .dyn_into::<HtmlDivElement>()
            .map_err(|_| BenchError::Render("failed to create scroll container".into()))?;
        let container_style = scroll_container.style();
        container_style.set_property("height", &format!("{}px", table.config().viewport_height))?;
        container_style.set_property("overflow", "auto")?;
        container_style.set_property("position", "relative")?;
        scroll_container.set_attribute("data-tablebench-scroll", route.strategy.segment())?;

        let table_el = document.create_element("table")?;
        scroll_container.append_child(&table_el)?;
        parent.append_child(&scroll_container)?;

        let settle_delay_ms = table.config().settle_delay_ms;
        let state = Rc::new(RefCell::new(SharedState {
            table,
            schedule: MeasurementSchedule::new(settle_delay_ms),
            settle_timer: None,
            document,
            scroll_container: scroll_container.clone(),
            table_el,
            report_callback: None,
        }));

        // The timer closure holds a weak reference so a torn-down viewer is never measured.
        let weak_state = Rc::downgrade(&state);
        state.borrow_mut().settle_timer = Some(SettleTimer::new(move |generation| {
            if let Some(state) = weak_state.upgrade() {
                TableBench::handle_settle_timeout(&state, generation);
            }
        }));

        let scroll_closure = Self::install_scroll_listener(&state, &scroll_container);
        let click_closure = Self::install_click_listener(&state, &scroll_container);

        tracing::info!(route = %route, "mounted table");

        let viewer = TableBench {
            state,
            scroll_closure,
            click_closure,
        };
        viewer.state.borrow_mut().table.timing().start(INITIAL_RENDER);
        viewer.render()?;
        viewer.state.borrow_mut().table.timing().end(INITIAL_RENDER);
        Self::arm_measurement(&viewer.state);
        Ok(viewer)
    }

    /// Rebuild the table DOM from the current state.
    ///
    /// # Errors
    /// Returns an error if DOM construction fails.
    pub fn render(&self) -> Result<(), JsValue> {
        Self::render_state(&self.state)
    }

    /// Regenerate the dataset for new counts and re-arm the measurement.
    ///
    /// # Errors
    /// Returns an error if the counts are out of range.
    pub fn configure(&self, row_count: usize, column_count: usize) -> Result<(), JsValue> {
        self.state
            .borrow_mut()
            .table
            .reconfigure(row_count, column_count)?;
        self.render()?;
        Self::arm_measurement(&self.state);
        Ok(())
    }

    /// Toggle the sort on `column`, as a header click would.
    ///
    /// # Errors
    /// Returns an error if re-rendering fails.
    pub fn sort(&self, column: &str) -> Result<bool, JsValue> {
        let changed = self.state.borrow_mut().table.toggle_sort(column);
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    /// Explicit layout-complete signal from the host; measures immediately.
    pub fn render_complete(&self) -> JsValue {
        Self::complete_measurement(&self.state, None)
    }

    /// Latest DOM report, or `null` before the first measurement.
    pub fn report(&self) -> JsValue {
        let report = self.state.borrow().schedule.report();
        serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
    }

    /// Node counts this renderer should produce for the current state.
    pub fn predicted_report(&self) -> JsValue {
        let report = self.state.borrow().table.predicted_report();
        serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
    }

    /// Register a callback invoked with `{ tdCount, thCount, trCount, total }`.
    pub fn on_report(&self, callback: Function) {
        self.state.borrow_mut().report_callback = Some(callback);
    }

    /// Current window (`first`, `last`, fillers) as a JS object.
    pub fn window(&self) -> JsValue {
        let window = self.state.borrow().table.render_window();
        serde_wasm_bindgen::to_value(&window).unwrap_or(JsValue::NULL)
    }

    /// Cancel any pending measurement and detach from the DOM.
    pub fn destroy(&mut self) {
        {
            let mut s = self.state.borrow_mut();
            if s.schedule.cancel() {
                tracing::debug!("cancelled pending measurement on teardown");
            }
            if let Some(timer) = s.settle_timer.as_mut() {
                timer.cancel();
            }
        }
        let container = self.state.borrow().scroll_container.clone();
        if let Some(closure) = self.scroll_closure.take() {
            let _ = container
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.click_closure.take() {
            let _ = container
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        container.remove();
    }
}

impl Drop for TableBench {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl TableBench {
    pub(crate) fn render_state(state: &Rc<RefCell<SharedState>>) -> Result<(), JsValue> {
        let s = state.borrow();
        render::render_table(&s.document, &s.table_el, &s.table)
    }
}
