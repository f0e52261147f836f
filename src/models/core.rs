//! Core data structures: cell identity and selection order
//!
//! `CellRef` identifies one table cell abstractly, independent of the DOM
//! that happens to render it. `SelectionState` owns the click order of the
//! current selection; a cell's rank is its 1-based position in that order,
//! so rank contiguity is structural rather than maintained by counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract identity of one table cell: `(tableId, row, col)`.
///
/// Row/col are explicit zero-based indices stamped at render time whenever
/// possible; `-1` marks an index that could not be determined.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub table_id: String,
    pub row: i32,
    pub col: i32,
}

impl CellRef {
    pub fn new(table_id: impl Into<String>, row: i32, col: i32) -> Self {
        Self {
            table_id: table_id.into(),
            row,
            col,
        }
    }

    /// Compact wire form used for durable storage: `"tableId|row-col"`.
    pub fn compact(&self) -> String {
        format!("{}|{}-{}", self.table_id, self.row, self.col)
    }

    /// Parse the compact wire form. Returns `None` for anything malformed;
    /// callers drop such entries silently.
    pub fn parse(s: &str) -> Option<Self> {
        let (table_id, pos) = s.split_once('|')?;
        let (row, col) = pos.split_once('-')?;
        if table_id.is_empty() {
            return None;
        }
        Some(Self {
            table_id: table_id.to_string(),
            row: row.parse().ok()?,
            col: col.parse().ok()?,
        })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.table_id, self.row, self.col)
    }
}

/// What a selection toggle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The cell was selected and given this 1-based rank.
    Selected(usize),
    /// The cell was deselected; later ranks closed the gap.
    Deselected,
}

/// The current selection in click order, spanning all rendered tables.
///
/// Rank of a cell = index in `entries` + 1, so after any mutation the ranks
/// are exactly `1..=N` with no gaps or duplicates.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    entries: Vec<CellRef>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        self.entries.contains(cell)
    }

    /// 1-based rank of a selected cell, `None` if it is not selected.
    pub fn rank_of(&self, cell: &CellRef) -> Option<usize> {
        self.entries.iter().position(|c| c == cell).map(|i| i + 1)
    }

    /// Selected cells in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &CellRef> {
        self.entries.iter()
    }

    /// Toggle a cell. A non-additive toggle clears the whole selection first,
    /// so a plain click always leaves exactly the clicked cell selected with
    /// rank 1. Deselecting removes the entry; the cells behind it renumber
    /// implicitly.
    pub fn toggle(&mut self, cell: CellRef, additive: bool) -> ToggleOutcome {
        if !additive {
            self.entries.clear();
        }
        if let Some(idx) = self.entries.iter().position(|c| c == &cell) {
            self.entries.remove(idx);
            ToggleOutcome::Deselected
        } else {
            self.entries.push(cell);
            ToggleOutcome::Selected(self.entries.len())
        }
    }

    /// Remove every selection across every table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the selection wholesale, in the given order. Used by replay
    /// after unresolvable entries have been dropped.
    pub fn set_entries(&mut self, entries: Vec<CellRef>) {
        self.entries = entries;
    }

    /// Human-readable selection order for the status line.
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "No cells selected.".to_string();
        }
        let parts: Vec<String> = self.entries.iter().map(|c| c.to_string()).collect();
        format!("Selection: {}", parts.join(" \u{2192} "))
    }
}
