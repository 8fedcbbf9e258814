//! Browser tests for the wasm viewer
//!
//! Run with: wasm-pack test --headless --firefox
//!
//! Mounts real tables into the document and compares the rendered node
//! counts with the predicted report.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::cast_possible_truncation)]

use tablebench::instrument::{measure, DocumentProbe};
use tablebench::{DomReport, TableBench};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn rendered(host: &HtmlElement) -> DomReport {
    measure(&DocumentProbe::scoped(host.clone().into()))
}

fn predicted(bench: &TableBench) -> DomReport {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(bench.predicted_report()).unwrap();
    DomReport::new(
        value["tdCount"].as_u64().unwrap() as usize,
        value["thCount"].as_u64().unwrap() as usize,
        value["trCount"].as_u64().unwrap() as usize,
    )
}

#[wasm_bindgen_test]
fn test_static_table_matches_prediction() {
    let host = host();
    let bench = TableBench::new(host.clone(), "/static/100/10", Some(1)).unwrap();
    assert_eq!(rendered(&host), DomReport::new(1000, 10, 101));
    assert_eq!(rendered(&host), predicted(&bench));
}

#[wasm_bindgen_test]
fn test_virtualized_table_matches_prediction() {
    let host = host();
    let bench = TableBench::new(host.clone(), "/virtualized/10000/10", Some(1)).unwrap();
    let report = rendered(&host);
    assert_eq!(report, predicted(&bench));
    assert!(report.tr_count < 100, "only the window is materialized");
}

#[wasm_bindgen_test]
fn test_render_complete_reports_once() {
    let host = host();
    let bench = TableBench::new(host.clone(), "/sortable/10/3", Some(1)).unwrap();
    assert!(!bench.render_complete().is_null());
    assert!(bench.render_complete().is_null(), "already reported");
    assert!(!bench.report().is_null());
}

#[wasm_bindgen_test]
fn test_sort_rerenders_header() {
    let host = host();
    let bench = TableBench::new(host.clone(), "/sortable/10/3", Some(1)).unwrap();
    assert!(bench.sort("Column 1").unwrap());
    let th = host.query_selector("th").unwrap().unwrap();
    assert_eq!(th.text_content().unwrap(), "Column 1 🔼");
    assert_eq!(rendered(&host), predicted(&bench));
}

#[wasm_bindgen_test]
fn test_destroy_detaches() {
    let host = host();
    let mut bench = TableBench::new(host.clone(), "/static/5/2", Some(1)).unwrap();
    bench.destroy();
    assert_eq!(host.child_element_count(), 0);
    assert!(bench.render_complete().is_null(), "cancelled measurement never reports");
}
