//! Marksheet Viewer WASM Module
//!
//! This is the client-side controller for the marksheet viewer page.
//! It owns cell selection, recording/replay of selection orders, and
//! export of selected cells; the DOM is a projection of this state.

pub mod models;
pub mod error;
pub mod session;
pub mod export;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use error::ViewerError;
pub use models::core::*;
pub use models::extraction::*;
pub use models::recording::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    // Reload the last saved recording so the idle status can report it
    // before any replay is requested.
    if let Some(saved) = dom::storage::load_recording() {
        log::info!("restored saved recording: {} cells", saved.len());
        session::with_session(|state| state.recorder.adopt_saved(saved));
    }

    log::info!("Marksheet Viewer WASM module initialized");
}
