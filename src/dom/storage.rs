//! Durable recording persistence
//!
//! One localStorage key holds the last saved recording as a JSON array of
//! compact cell references. Storage failures (quota, disabled storage,
//! malformed blob) are silently ignored; recording then degrades to
//! session-only.

use crate::models::{CellRef, Recorder};

pub const RECORDING_STORAGE_KEY: &str = "marksheet.recording";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn save_recording(cells: &[CellRef]) {
    let Some(storage) = local_storage() else { return };
    let Ok(blob) = serde_json::to_string(&Recorder::to_wire(cells)) else {
        return;
    };
    let _ = storage.set_item(RECORDING_STORAGE_KEY, &blob);
}

pub fn load_recording() -> Option<Vec<CellRef>> {
    let blob = local_storage()?.get_item(RECORDING_STORAGE_KEY).ok()??;
    let entries: Vec<String> = serde_json::from_str(&blob).ok()?;
    Some(Recorder::from_wire(&entries))
}
