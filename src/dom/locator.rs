//! Cell locator
//!
//! Derives the stable `(tableId, row, col)` identity of a rendered cell.
//! Prefers the explicit `data-row`/`data-col` markers stamped at render
//! time; falls back to structural traversal when they are missing. All of
//! this is best-effort with no error path: indices that cannot be
//! determined come back as `-1`.

use web_sys::Element;

use crate::models::CellRef;

fn attr_i32(el: &Element, name: &str) -> Option<i32> {
    el.get_attribute(name)?.parse().ok()
}

/// Index of an element among its parent's element children.
fn sibling_index(el: &Element) -> i32 {
    let mut index = 0;
    let mut cursor = el.previous_element_sibling();
    while let Some(prev) = cursor {
        index += 1;
        cursor = prev.previous_element_sibling();
    }
    index
}

/// Zero-based `(row, col)` of a cell element.
pub fn cell_position(cell: &Element) -> (i32, i32) {
    let row = attr_i32(cell, "data-row")
        .or_else(|| cell.parent_element().map(|row_el| sibling_index(&row_el)))
        .unwrap_or(-1);
    let col = attr_i32(cell, "data-col").unwrap_or_else(|| sibling_index(cell));
    (row, col)
}

/// The table element owning a cell, if any.
pub fn owning_table(cell: &Element) -> Option<Element> {
    cell.closest("table").ok().flatten()
}

/// Full abstract identity of a cell. `None` only when the cell is outside
/// any table carrying an id.
pub fn locate(cell: &Element) -> Option<CellRef> {
    let table = owning_table(cell)?;
    let table_id = table.get_attribute("id")?;
    let (row, col) = cell_position(cell);
    Some(CellRef::new(table_id, row, col))
}

fn non_empty_text(el: &Element) -> Option<String> {
    let text = el.text_content()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Header label of the cell at `(row, col)`. Tables with a `<th>` header
/// row use the header cell of the same column; header-less two-column label
/// tables use the label cell sitting next to the value in the same row.
pub fn header_label(table: &Element, row: i32, col: i32) -> Option<String> {
    if col >= 0 {
        if let Ok(Some(th)) = table.query_selector(&format!("tr th:nth-child({})", col + 1)) {
            return non_empty_text(&th);
        }
    }
    if row >= 0 && col > 0 {
        if let Ok(Some(label)) =
            table.query_selector(&format!("tr:nth-child({}) td:first-child", row + 1))
        {
            return non_empty_text(&label);
        }
    }
    None
}
