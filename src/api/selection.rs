//! Selection operations (cell clicks, clearing, export)

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::api::helpers::{document, js_error};
use crate::dom::{clipboard, locator, render};
use crate::export::join_exported;
use crate::session::{self, SessionState};
use crate::{wasm_info, wasm_warn};

/// Repaint selection and refresh both status lines from the session state.
fn project_and_report(doc: &Document, state: &SessionState) -> Result<(), JsValue> {
    render::project_selection(doc, &state.selection)?;
    render::set_status(doc, render::SELECTION_STATUS_ID, &state.selection.summary());
    render::set_status(doc, render::RECORDING_STATUS_ID, &state.recorder.status_line());
    Ok(())
}

/// Handle a click on (or inside) a table cell.
///
/// `additive` is whether a multi-select modifier was held; while a recording
/// is active every click is treated as additive regardless. The same click
/// feeds two observers: the selection tracker always, the recorder only in
/// recording mode.
#[wasm_bindgen(js_name = handleCellClick)]
pub fn handle_cell_click(target: JsValue, additive: bool) -> Result<(), JsValue> {
    let element: Element = target
        .dyn_into()
        .map_err(|_| js_error("click target is not an element"))?;
    // Clicks can land on the order badge; resolve to the owning cell.
    let Some(cell) = element.closest("td").ok().flatten() else {
        return Ok(());
    };
    let Some(cell_ref) = locator::locate(&cell) else {
        wasm_warn!("clicked cell has no identifiable table, ignoring");
        return Ok(());
    };
    wasm_info!("handleCellClick: {} additive={}", cell_ref, additive);

    let doc = document()?;
    let label = locator::owning_table(&cell)
        .and_then(|table| locator::header_label(&table, cell_ref.row, cell_ref.col));
    session::with_session(|state| -> Result<(), JsValue> {
        state.click(cell_ref, additive, label);
        project_and_report(&doc, state)
    })
}

/// Clear the whole selection across every table.
#[wasm_bindgen(js_name = clearSelection)]
pub fn clear_selection() -> Result<(), JsValue> {
    wasm_info!("clearSelection called");
    let doc = document()?;
    session::with_session(|state| -> Result<(), JsValue> {
        state.selection.clear();
        project_and_report(&doc, state)
    })
}

/// Copy the selected cells, in rank order, as one tab-separated line.
#[wasm_bindgen(js_name = exportSelected)]
pub fn export_selected() -> Result<(), JsValue> {
    let doc = document()?;
    let texts: Vec<String> = session::with_session(|state| {
        state
            .selection
            .iter()
            .filter_map(|cell_ref| render::find_cell(&doc, cell_ref))
            .map(|cell| render::cell_text(&cell))
            .collect()
    });
    wasm_info!("exportSelected: {} cells", texts.len());

    if texts.is_empty() {
        render::set_status(&doc, render::COPY_STATUS_ID, "Nothing to copy.");
        return Ok(());
    }
    let count = texts.len();
    clipboard::copy_text(doc, join_exported(texts), count);
    Ok(())
}
