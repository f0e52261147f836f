//! Marksheet Viewer WASM API
//!
//! This module provides the JavaScript-facing API for the viewer page. It
//! includes shared utilities for serialization, validation, and error
//! handling, as well as the exported functions organized by functional
//! domain.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error handling, and logging utilities
//! - `selection`: cell clicks, clearing, and clipboard export
//! - `recording`: recording mode, persistence, and replay
//! - `extraction`: extraction responses, rendering, and the file registry

pub mod helpers;
pub mod selection;
pub mod recording;
pub mod extraction;

// Re-export all public functions to keep the JS surface flat
pub use selection::{clear_selection, export_selected, handle_cell_click};
pub use recording::{recording_status, replay_recording, start_recording, stop_recording};
pub use extraction::{
    add_file, clear_files, extract_document, list_files, remove_file, render_extraction,
    render_extraction_json,
};
