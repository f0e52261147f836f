//! Error types for the viewer core

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by the non-DOM core. Everything DOM-side degrades in place
/// instead of erroring, so this stays small.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid extraction payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("unsupported file type: '{0}' (only PDF files are allowed)")]
    UnsupportedFile(String),
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
