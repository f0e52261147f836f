//! Data model for the marksheet viewer
//!
//! The canonical state lives here as plain data structures; the DOM layer
//! only projects it. Nothing in this module touches the browser.

pub mod core;
pub mod extraction;
pub mod files;
pub mod recording;

// Re-export commonly used types
pub use self::core::{CellRef, SelectionState, ToggleOutcome};
pub use extraction::{BlockSummary, ExtractionResponse, MarksheetBlock};
pub use files::{FileEntry, FileRegistry};
pub use recording::{RecordedCell, Recorder, RecordingMode};
