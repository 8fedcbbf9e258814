//! Browser bindings: counting DOM nodes and the fallback settle timer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use super::NodeProbe;

/// Counts elements under a root with `querySelectorAll`.
#[derive(Debug, Clone)]
pub struct DocumentProbe {
    root: Element,
}

impl DocumentProbe {
    /// Count only under `root` (one table among several on a page).
    pub fn scoped(root: Element) -> Self {
        Self { root }
    }
}

impl NodeProbe for DocumentProbe {
    fn count(&self, tag: &str) -> Option<usize> {
        let list = self.root.query_selector_all(tag).ok()?;
        usize::try_from(list.length()).ok()
    }
}

/// One-shot `setTimeout` wrapper that is cleared when dropped.
///
/// The callback closure is created once and reused across schedules, so a
/// firing timer never drops the closure it is running in. Each schedule
/// hands `setTimeout` the measurement generation it was armed for, and the
/// callback receives that generation back when the timer fires.
pub struct SettleTimer {
    handle: Option<i32>,
    closure: Closure<dyn FnMut(JsValue)>,
}

impl SettleTimer {
    pub fn new(mut callback: impl FnMut(u64) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move |generation: JsValue| {
            match u64::try_from(generation) {
                Ok(generation) => callback(generation),
                Err(value) => tracing::debug!(?value, "settle timer fired without a generation"),
            }
        }) as Box<dyn FnMut(JsValue)>);
        Self {
            handle: None,
            closure,
        }
    }

    /// (Re)start the timer for `generation`, cancelling any pending one.
    pub fn schedule(&mut self, delay_ms: u32, generation: u64) -> bool {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_1(
            self.closure.as_ref().unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
            &JsValue::from(generation),
        ) {
            Ok(id) => {
                self.handle = Some(id);
                true
            }
            Err(_) => false,
        }
    }

    /// Forget the handle of a timer that has already fired.
    pub fn fired(&mut self) {
        self.handle = None;
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for SettleTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
