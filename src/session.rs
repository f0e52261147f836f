//! Session state singleton
//!
//! All mutable UI state lives in one `SessionState` behind a module-level
//! mutex; every exported API function funnels its mutation through here.
//! The browser runs us single-threaded, so the mutex is only satisfying the
//! `Sync` bound on statics, never contended.

use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::models::{CellRef, FileRegistry, Recorder, SelectionState, ToggleOutcome};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<SessionState> = Mutex::new(SessionState::new());
}

/// Run a closure against the process-wide session state.
pub fn with_session<T>(f: impl FnOnce(&mut SessionState) -> T) -> T {
    let mut session = SESSION.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut session)
}

#[derive(Debug, Default)]
pub struct SessionState {
    pub selection: SelectionState,
    pub recorder: Recorder,
    pub files: FileRegistry,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one cell click to its two observers: the selection tracker
    /// always, the recorder only while a recording is active. While
    /// recording, every click is treated as additive regardless of whether
    /// a multi-select modifier was held. `label` is the header label
    /// resolved at click time, kept for the recording status line.
    pub fn click(
        &mut self,
        cell: CellRef,
        additive: bool,
        label: Option<String>,
    ) -> ToggleOutcome {
        let additive = additive || self.recorder.is_recording();
        let outcome = self.selection.toggle(cell.clone(), additive);
        if self.recorder.is_recording() {
            match outcome {
                ToggleOutcome::Selected(_) => self.recorder.record(cell, label),
                ToggleOutcome::Deselected => self.recorder.erase(&cell),
            }
        }
        outcome
    }

    /// Replay core: install `cells` as the new selection, keeping only the
    /// entries the resolver can still find and assigning dense ranks
    /// `1..=m` over that subset in the recorded order. Unresolvable entries
    /// are dropped silently. Returns the resolved count.
    pub fn replay_resolved<F>(&mut self, cells: &[CellRef], mut resolve: F) -> usize
    where
        F: FnMut(&CellRef) -> bool,
    {
        let resolved: Vec<CellRef> = cells.iter().filter(|c| resolve(c)).cloned().collect();
        let count = resolved.len();
        self.selection.set_entries(resolved);
        count
    }
}
