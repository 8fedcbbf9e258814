//! Build the `<table>` DOM for the current table state.
//!
//! The node structure here is what [`BenchTable::predicted_report`]
//! describes: one header row, one row per materialized data row, and one
//! spanning filler row per non-zero filler extent.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::dataset::Column;
use crate::sort::{SortDirection, SortState};
use crate::table::BenchTable;

/// Attribute carrying the column identifier on header cells.
pub(crate) const COLUMN_ATTR: &str = "data-column";

/// Attribute carrying the stable row identity on body rows.
pub(crate) const ROW_ID_ATTR: &str = "data-row-id";

fn create(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element(tag)
}

fn header_label(column: &Column, sort: &SortState) -> String {
    if !sort.is_sorted_by(&column.name) {
        return column.name.clone();
    }
    match sort.direction() {
        Some(SortDirection::Ascending) => format!("{} 🔼", column.name),
        Some(SortDirection::Descending) => format!("{} 🔽", column.name),
        None => column.name.clone(),
    }
}

fn filler_row(document: &Document, height: f64, span: usize) -> Result<Element, JsValue> {
    let tr = create(document, "tr")?;
    tr.set_attribute("aria-hidden", "true")?;
    let td = create(document, "td")?;
    td.set_attribute("colspan", &span.max(1).to_string())?;
    if let Some(td) = td.dyn_ref::<HtmlElement>() {
        let style = td.style();
        style.set_property("height", &format!("{height}px"))?;
        style.set_property("padding", "0")?;
        style.set_property("border", "0")?;
    }
    tr.append_child(&td)?;
    Ok(tr)
}

/// Replace the contents of `table_el` with the current header and window.
pub(crate) fn render_table(
    document: &Document,
    table_el: &Element,
    table: &BenchTable,
) -> Result<(), JsValue> {
    table_el.set_inner_html("");

    let dataset = table.dataset();
    let sort = table.sort_state();
    let sortable = table.strategy().supports_sort();

    let thead = create(document, "thead")?;
    let header_row = create(document, "tr")?;
    for column in &dataset.columns {
        let th = create(document, "th")?;
        th.set_attribute(COLUMN_ATTR, &column.name)?;
        if sortable {
            if let Some(th) = th.dyn_ref::<HtmlElement>() {
                th.style().set_property("cursor", "pointer")?;
            }
        }
        th.set_text_content(Some(&header_label(column, sort)));
        header_row.append_child(&th)?;
    }
    thead.append_child(&header_row)?;
    table_el.append_child(&thead)?;

    let window = table.render_window();
    let span = dataset.column_count();
    let tbody = create(document, "tbody")?;
    if window.leading_filler > 0.0 {
        tbody.append_child(&filler_row(document, window.leading_filler, span)?)?;
    }
    for row in table.visible_rows() {
        let tr = create(document, "tr")?;
        tr.set_attribute(ROW_ID_ATTR, row.id.as_str())?;
        for cell in &row.cells {
            let td = create(document, "td")?;
            td.set_text_content(Some(&cell.display()));
            tr.append_child(&td)?;
        }
        tbody.append_child(&tr)?;
    }
    if window.trailing_filler > 0.0 {
        tbody.append_child(&filler_row(document, window.trailing_filler, span)?)?;
    }
    table_el.append_child(&tbody)?;

    tracing::trace!(
        first = window.first,
        rows = window.len,
        columns = span,
        "rendered table"
    );
    Ok(())
}
