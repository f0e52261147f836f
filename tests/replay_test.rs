// Replay: re-resolving a saved recording against a new table set

use viewer_wasm::models::{CellRef, Recorder};
use viewer_wasm::session::SessionState;

fn cell(table: &str, row: i32, col: i32) -> CellRef {
    CellRef::new(table, row, col)
}

#[test]
fn replay_reproduces_recorded_ranks_after_persistence_round_trip() {
    // Record A, B, C and stop.
    let mut state = SessionState::new();
    state.recorder.start();
    let a = cell("general-info", 0, 1);
    let b = cell("block-0", 2, 3);
    let c = cell("block-0", 4, 6);
    for cell in [&a, &b, &c] {
        state.recorder.record(cell.clone(), None);
    }
    let saved = state.recorder.stop().expect("recording was active").to_vec();

    // Simulate a page reload: the recording survives only through storage.
    let blob = serde_json::to_string(&Recorder::to_wire(&saved)).expect("wire serializes");
    let mut fresh = SessionState::new();
    let entries: Vec<String> = serde_json::from_str(&blob).expect("wire parses");
    fresh.recorder.adopt_saved(Recorder::from_wire(&entries));

    // All three still resolve in the new table set.
    let cells = fresh.recorder.saved().expect("adopted recording").to_vec();
    let resolved = fresh.replay_resolved(&cells, |_| true);

    assert_eq!(resolved, 3);
    assert_eq!(fresh.selection.rank_of(&a), Some(1));
    assert_eq!(fresh.selection.rank_of(&b), Some(2));
    assert_eq!(fresh.selection.rank_of(&c), Some(3));
}

#[test]
fn unresolvable_entries_are_skipped_with_dense_ranks() {
    let mut state = SessionState::new();
    let cells = vec![
        cell("block-0", 0, 0),
        cell("block-1", 1, 1), // table no longer exists
        cell("block-0", 2, 2),
        cell("block-2", 0, 5),
    ];

    let resolved = state.replay_resolved(&cells, |c| c.table_id != "block-1");

    assert_eq!(resolved, 3);
    assert_eq!(state.selection.len(), 3);
    assert_eq!(state.selection.rank_of(&cells[0]), Some(1));
    assert_eq!(state.selection.rank_of(&cells[1]), None);
    assert_eq!(
        state.selection.rank_of(&cells[2]),
        Some(2),
        "ranks are reassigned densely over the resolved subset"
    );
    assert_eq!(state.selection.rank_of(&cells[3]), Some(3));
}

#[test]
fn replay_replaces_the_previous_selection() {
    let mut state = SessionState::new();
    state.selection.toggle(cell("block-9", 9, 9), true);

    let cells = vec![cell("block-0", 0, 0)];
    state.replay_resolved(&cells, |_| true);

    assert_eq!(state.selection.len(), 1);
    assert!(!state.selection.contains(&cell("block-9", 9, 9)));
}

#[test]
fn replay_of_nothing_resolvable_leaves_selection_empty() {
    let mut state = SessionState::new();
    state.selection.toggle(cell("block-0", 0, 0), true);

    let cells = vec![cell("gone", 0, 0), cell("gone", 1, 1)];
    let resolved = state.replay_resolved(&cells, |_| false);

    assert_eq!(resolved, 0);
    assert!(state.selection.is_empty());
}

#[test]
fn replay_of_empty_recording_is_a_noop_on_content() {
    let mut state = SessionState::new();
    let resolved = state.replay_resolved(&[], |_| true);
    assert_eq!(resolved, 0);
    assert!(state.selection.is_empty());
}
