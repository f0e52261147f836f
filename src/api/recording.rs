//! Recording mode and replay operations

use wasm_bindgen::prelude::*;

use crate::api::helpers::document;
use crate::dom::{render, storage};
use crate::session;
use crate::wasm_info;

/// Enter recording mode. Clears the current selection and the in-progress
/// recording; a no-op when already recording.
#[wasm_bindgen(js_name = startRecording)]
pub fn start_recording() -> Result<(), JsValue> {
    wasm_info!("startRecording called");
    let doc = document()?;
    session::with_session(|state| -> Result<(), JsValue> {
        if state.recorder.start() {
            state.selection.clear();
        }
        render::project_selection(&doc, &state.selection)?;
        render::set_status(&doc, render::SELECTION_STATUS_ID, &state.selection.summary());
        render::set_status(&doc, render::RECORDING_STATUS_ID, &state.recorder.status_line());
        Ok(())
    })
}

/// Leave recording mode, freezing the in-progress recording as the saved
/// one and persisting it. A no-op when not recording.
#[wasm_bindgen(js_name = stopRecording)]
pub fn stop_recording() -> Result<(), JsValue> {
    wasm_info!("stopRecording called");
    let doc = document()?;
    session::with_session(|state| {
        if let Some(saved) = state.recorder.stop() {
            storage::save_recording(saved);
            wasm_info!("recording saved: {} cells", saved.len());
        }
        render::set_status(&doc, render::RECORDING_STATUS_ID, &state.recorder.status_line());
    });
    Ok(())
}

/// Current recorder status line, for pages that render it themselves.
#[wasm_bindgen(js_name = recordingStatus)]
pub fn recording_status() -> String {
    session::with_session(|state| state.recorder.status_line())
}

/// Re-apply the saved recording to whatever tables currently exist.
///
/// Falls back to durable storage when nothing was recorded this session;
/// a no-op when neither yields a recording. Entries whose table or cell no
/// longer resolves are skipped silently, and ranks are reassigned densely
/// over the resolved subset.
#[wasm_bindgen(js_name = replayRecording)]
pub fn replay_recording() -> Result<(), JsValue> {
    let doc = document()?;
    session::with_session(|state| -> Result<(), JsValue> {
        if state.recorder.saved().is_none() {
            if let Some(loaded) = storage::load_recording() {
                state.recorder.adopt_saved(loaded);
            }
        }
        let cells = state.recorder.saved().map(<[_]>::to_vec).unwrap_or_default();
        if cells.is_empty() {
            wasm_info!("replayRecording: nothing to replay");
            return Ok(());
        }

        state.selection.clear();
        let resolved = state.replay_resolved(&cells, |cell_ref| {
            render::find_cell(&doc, cell_ref).is_some()
        });
        wasm_info!("replayRecording: {} of {} cells resolved", resolved, cells.len());

        render::project_selection(&doc, &state.selection)?;
        render::set_status(&doc, render::SELECTION_STATUS_ID, &state.selection.summary());
        render::set_status(&doc, render::RECORDING_STATUS_ID, &state.recorder.status_line());
        Ok(())
    })
}
