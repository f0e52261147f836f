//! Table rendering and selection projection
//!
//! Rendered tables are ephemeral: every successful extraction response
//! rebuilds the results container wholesale, which invalidates whatever
//! selection and order badges existed before. Selection itself lives in the
//! session state; `project_selection` repaints the DOM from it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::models::{CellRef, ExtractionResponse, MarksheetBlock, SelectionState};

pub const RESULTS_CONTAINER_ID: &str = "results";
pub const GENERAL_INFO_TABLE_ID: &str = "general-info";
pub const SELECTION_STATUS_ID: &str = "selection-status";
pub const RECORDING_STATUS_ID: &str = "recording-status";
pub const COPY_STATUS_ID: &str = "copy-status";
pub const NO_DATA_TEXT: &str = "No valid data found";

const SELECTED_CLASS: &str = "selected";
const BADGE_CLASS: &str = "order-badge";

fn create(doc: &Document, tag: &str) -> Result<Element, JsValue> {
    doc.create_element(tag)
}

/// Update a status line; missing status elements are simply skipped.
pub fn set_status(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Rebuild the results container from an extraction response. A failed or
/// empty response renders the no-data placeholder instead of tables.
pub fn render_extraction(doc: &Document, response: &ExtractionResponse) -> Result<(), JsValue> {
    let container = doc
        .get_element_by_id(RESULTS_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("results container missing from page"))?;
    container.set_inner_html("");

    if response.is_error() || response.is_empty() {
        let placeholder = create(doc, "p")?;
        placeholder.set_class_name("no-data");
        placeholder.set_text_content(Some(NO_DATA_TEXT));
        container.append_child(&placeholder)?;
        return Ok(());
    }

    let pairs = response.display_pairs();
    if !pairs.is_empty() {
        container.append_child(&build_general_info(doc, &pairs)?.into())?;
    }
    for (index, block) in response.marksheet_blocks.iter().enumerate() {
        container.append_child(&build_block(doc, index, block)?.into())?;
    }
    Ok(())
}

/// Header-less two-column label table for the allow-listed general info.
fn build_general_info(doc: &Document, pairs: &[(&str, &str)]) -> Result<Element, JsValue> {
    let table = create(doc, "table")?;
    table.set_id(GENERAL_INFO_TABLE_ID);
    table.set_class_name("data-table general-info");
    let body = create(doc, "tbody")?;

    for (row, (key, value)) in pairs.iter().enumerate() {
        let tr = create(doc, "tr")?;
        tr.append_child(&build_cell(doc, "td", key, row, 0)?.into())?;
        tr.append_child(&build_cell(doc, "td", value, row, 1)?.into())?;
        body.append_child(&tr)?;
    }

    table.append_child(&body)?;
    Ok(table)
}

/// One marksheet block: optional header row, body rows, summary line.
fn build_block(doc: &Document, index: usize, block: &MarksheetBlock) -> Result<Element, JsValue> {
    let section = create(doc, "div")?;
    section.set_class_name("marksheet-block");

    let table = create(doc, "table")?;
    table.set_id(&format!("block-{}", index));
    table.set_class_name("data-table");

    if let Some(header) = &block.header {
        let head = create(doc, "thead")?;
        let tr = create(doc, "tr")?;
        for (col, label) in header.iter().enumerate() {
            let th = create(doc, "th")?;
            th.set_text_content(Some(label));
            th.set_attribute("data-col", &col.to_string())?;
            tr.append_child(&th)?;
        }
        head.append_child(&tr)?;
        table.append_child(&head)?;
    }

    let body = create(doc, "tbody")?;
    for (row, values) in block.rows.iter().enumerate() {
        let tr = create(doc, "tr")?;
        for (col, value) in values.iter().enumerate() {
            tr.append_child(&build_cell(doc, "td", value, row, col)?.into())?;
        }
        body.append_child(&tr)?;
    }
    table.append_child(&body)?;
    section.append_child(&table)?;

    if let Some(summary) = &block.summary {
        let fields = summary.display_fields();
        if !fields.is_empty() {
            let line = create(doc, "div")?;
            line.set_class_name("block-summary");
            let text: Vec<String> = fields
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect();
            line.set_text_content(Some(&text.join(" | ")));
            section.append_child(&line)?;
        }
    }
    Ok(section)
}

fn build_cell(
    doc: &Document,
    tag: &str,
    text: &str,
    row: usize,
    col: usize,
) -> Result<Element, JsValue> {
    let cell = create(doc, tag)?;
    cell.set_text_content(Some(text));
    cell.set_attribute("data-row", &row.to_string())?;
    cell.set_attribute("data-col", &col.to_string())?;
    Ok(cell)
}

/// Resolve a cell reference against whatever tables currently exist.
/// Prefers the explicit position markers; falls back to positional
/// traversal of the table body's children. `None` means the entry cannot be
/// resolved right now (table gone, cell gone) and should be skipped.
pub fn find_cell(doc: &Document, cell: &CellRef) -> Option<Element> {
    let table = doc.get_element_by_id(&cell.table_id)?;
    let selector = format!(
        "td[data-row=\"{}\"][data-col=\"{}\"]",
        cell.row, cell.col
    );
    if let Ok(Some(found)) = table.query_selector(&selector) {
        return Some(found);
    }
    if cell.row < 0 || cell.col < 0 {
        return None;
    }
    let body = table
        .query_selector("tbody")
        .ok()
        .flatten()
        .unwrap_or(table);
    let row_el = body.children().item(cell.row as u32)?;
    row_el.children().item(cell.col as u32)
}

/// Strip all selection classes, rank attributes and order badges.
pub fn clear_selection_markers(doc: &Document) {
    if let Ok(selected) = doc.query_selector_all(&format!(".{}", SELECTED_CLASS)) {
        for i in 0..selected.length() {
            let Some(node) = selected.get(i) else { continue };
            if let Some(el) = node.dyn_ref::<Element>() {
                let _ = el.class_list().remove_1(SELECTED_CLASS);
                let _ = el.remove_attribute("data-order");
            }
        }
    }
    if let Ok(badges) = doc.query_selector_all(&format!(".{}", BADGE_CLASS)) {
        for i in 0..badges.length() {
            let Some(node) = badges.get(i) else { continue };
            if let Some(el) = node.dyn_ref::<Element>() {
                el.remove();
            }
        }
    }
}

/// Mark one cell selected with the given rank and give it an order badge.
fn apply_badge(doc: &Document, cell: &Element, rank: usize) -> Result<(), JsValue> {
    let _ = cell.class_list().add_1(SELECTED_CLASS);
    cell.set_attribute("data-order", &rank.to_string())?;
    if let Ok(Some(existing)) = cell.query_selector(&format!(".{}", BADGE_CLASS)) {
        existing.set_text_content(Some(&rank.to_string()));
        return Ok(());
    }
    let badge = create(doc, "span")?;
    badge.set_class_name(BADGE_CLASS);
    badge.set_text_content(Some(&rank.to_string()));
    cell.append_child(&badge)?;
    Ok(())
}

/// Repaint the page from the selection state: rendering is a projection of
/// state, never the state itself.
pub fn project_selection(doc: &Document, selection: &SelectionState) -> Result<(), JsValue> {
    clear_selection_markers(doc);
    for (index, cell_ref) in selection.iter().enumerate() {
        if let Some(cell) = find_cell(doc, cell_ref) {
            apply_badge(doc, &cell, index + 1)?;
        }
    }
    Ok(())
}

/// Textual content of a cell with any order-badge annotation excluded.
pub fn cell_text(cell: &Element) -> String {
    let nodes = cell.child_nodes();
    let mut out = String::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        if let Some(el) = node.dyn_ref::<Element>() {
            if el.class_list().contains(BADGE_CLASS) {
                continue;
            }
        }
        if let Some(text) = node.text_content() {
            out.push_str(&text);
        }
    }
    out.trim().to_string()
}
