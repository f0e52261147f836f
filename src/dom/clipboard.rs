//! Clipboard export
//!
//! One-shot asynchronous write through `navigator.clipboard`. The outcome
//! is reported to the copy status line; a success message clears itself
//! after a short delay. No retry, no timeout.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Document;

use super::render::{set_status, COPY_STATUS_ID};

const STATUS_CLEAR_MS: i32 = 2500;

/// Write the exported line to the system clipboard and report the outcome.
pub fn copy_text(doc: Document, text: String, cell_count: usize) {
    let Some(window) = web_sys::window() else { return };
    let promise = window.navigator().clipboard().write_text(&text);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                let plural = if cell_count == 1 { "" } else { "s" };
                set_status(&doc, COPY_STATUS_ID, &format!("Copied {} cell{}.", cell_count, plural));
                schedule_status_clear(&doc);
            }
            Err(_) => {
                set_status(&doc, COPY_STATUS_ID, "Copy to clipboard failed.");
            }
        }
    });
}

fn schedule_status_clear(doc: &Document) {
    let Some(window) = web_sys::window() else { return };
    let doc = doc.clone();
    let callback = Closure::once_into_js(move || {
        set_status(&doc, COPY_STATUS_ID, "");
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        STATUS_CLEAR_MS,
    );
}
