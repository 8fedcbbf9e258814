//! Scroll and header-click handlers for `TableBench`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlDivElement, MouseEvent};

use super::render::COLUMN_ATTR;
use super::{SharedState, TableBench};

impl TableBench {
    pub(crate) fn install_scroll_listener(
        state: &Rc<RefCell<SharedState>>,
        container: &HtmlDivElement,
    ) -> Option<Closure<dyn FnMut(web_sys::Event)>> {
        let weak_state = Rc::downgrade(state);
        let container_for_scroll = container.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let offset = f64::from(container_for_scroll.scroll_top());
            let changed = state.borrow_mut().table.scroll_to(offset);
            if changed {
                if let Err(e) = TableBench::render_state(&state) {
                    web_sys::console::error_1(&e);
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        container
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }

    pub(crate) fn install_click_listener(
        state: &Rc<RefCell<SharedState>>,
        container: &HtmlDivElement,
    ) -> Option<Closure<dyn FnMut(MouseEvent)>> {
        let weak_state = Rc::downgrade(state);
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let Some(column) = clicked_column(&event) else {
                return;
            };
            let changed = state.borrow_mut().table.toggle_sort(&column);
            if changed {
                if let Err(e) = TableBench::render_state(&state) {
                    web_sys::console::error_1(&e);
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        container
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }
}

/// Column identifier of the header cell under a click, if any.
fn clicked_column(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let th = target.closest("th").ok()??;
    th.get_attribute(COLUMN_ATTR)
}
