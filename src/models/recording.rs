//! Recording mode: capturing and freezing selection orders
//!
//! The recorder is a two-state machine (`Idle`/`Recording`). While recording
//! is active it mirrors every selection toggle into an in-progress list; the
//! visible order badge of a recorded cell is its 1-based position in that
//! list, so erasing a cell renumbers the remainder implicitly. Stopping
//! freezes the list into the saved recording, which survives independent of
//! whatever the selection does afterwards.

use serde::{Deserialize, Serialize};

use super::core::CellRef;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordingMode {
    #[default]
    Idle,
    Recording,
}

/// One captured cell plus the header label resolved at click time.
/// The label is display-only and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCell {
    pub cell: CellRef,
    pub label: Option<String>,
}

impl RecordedCell {
    /// Text shown for this cell in the recording status line.
    fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("R{}C{}", self.cell.row, self.cell.col),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Recorder {
    mode: RecordingMode,
    in_progress: Vec<RecordedCell>,
    saved: Option<Vec<CellRef>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RecordingMode {
        self.mode
    }

    pub fn is_recording(&self) -> bool {
        self.mode == RecordingMode::Recording
    }

    /// Enter recording mode with a fresh in-progress list. Returns `false`
    /// (and changes nothing) if a recording is already active.
    pub fn start(&mut self) -> bool {
        if self.is_recording() {
            return false;
        }
        self.in_progress.clear();
        self.mode = RecordingMode::Recording;
        true
    }

    /// Freeze the in-progress list as the saved recording and go idle.
    /// Returns the saved cells for the caller to persist, or `None` if no
    /// recording was active.
    pub fn stop(&mut self) -> Option<&[CellRef]> {
        if !self.is_recording() {
            return None;
        }
        self.mode = RecordingMode::Idle;
        let frozen: Vec<CellRef> = self.in_progress.iter().map(|r| r.cell.clone()).collect();
        self.in_progress.clear();
        self.saved = Some(frozen);
        self.saved.as_deref()
    }

    /// Mirror of a select while recording. No-op when idle or when the cell
    /// is already captured.
    pub fn record(&mut self, cell: CellRef, label: Option<String>) {
        if !self.is_recording() || self.in_progress.iter().any(|r| r.cell == cell) {
            return;
        }
        self.in_progress.push(RecordedCell { cell, label });
    }

    /// Mirror of a deselect while recording. Badges of the remaining cells
    /// renumber to their new list positions.
    pub fn erase(&mut self, cell: &CellRef) {
        if !self.is_recording() {
            return;
        }
        self.in_progress.retain(|r| &r.cell != cell);
    }

    /// 1-based order badge of a recorded cell, `None` if it is not in the
    /// in-progress recording.
    pub fn badge_of(&self, cell: &CellRef) -> Option<usize> {
        self.in_progress
            .iter()
            .position(|r| &r.cell == cell)
            .map(|i| i + 1)
    }

    pub fn in_progress(&self) -> &[RecordedCell] {
        &self.in_progress
    }

    pub fn saved(&self) -> Option<&[CellRef]> {
        self.saved.as_deref()
    }

    /// Install a recording loaded from durable storage, but only when none
    /// was created this session.
    pub fn adopt_saved(&mut self, cells: Vec<CellRef>) {
        if self.saved.is_none() {
            self.saved = Some(cells);
        }
    }

    /// Wire form for durable storage: one compact string per cell.
    pub fn to_wire(cells: &[CellRef]) -> Vec<String> {
        cells.iter().map(CellRef::compact).collect()
    }

    /// Parse the wire form, dropping malformed entries silently.
    pub fn from_wire<S: AsRef<str>>(entries: &[S]) -> Vec<CellRef> {
        entries
            .iter()
            .filter_map(|s| CellRef::parse(s.as_ref()))
            .collect()
    }

    /// Human-readable recorder status line.
    pub fn status_line(&self) -> String {
        match self.mode {
            RecordingMode::Recording => {
                if self.in_progress.is_empty() {
                    "Recording: click cells to capture an order.".to_string()
                } else {
                    let labels: Vec<String> =
                        self.in_progress.iter().map(RecordedCell::display_label).collect();
                    format!("Recording: {}", labels.join(" \u{2192} "))
                }
            }
            RecordingMode::Idle => match &self.saved {
                Some(cells) => format!("Saved recording: {} cells.", cells.len()),
                None => "Not recording.".to_string(),
            },
        }
    }
}
