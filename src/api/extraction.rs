//! Extraction responses, rendering, and the client-side file registry

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, FormData, RequestInit, Response};

use crate::api::helpers::{self, document, js_error};
use crate::dom::render;
use crate::models::ExtractionResponse;
use crate::session;
use crate::{wasm_info, wasm_warn};

/// Backend endpoint that extracts an uploaded document in one round trip.
const EXTRACT_ENDPOINT: &str = "/api/extract_stream";

/// Rebuild the tables from a response and invalidate the selection.
/// Tables are ephemeral: any rebuild drops selection and order badges.
fn apply_response(doc: &Document, response: &ExtractionResponse) -> Result<(), JsValue> {
    render::render_extraction(doc, response)?;
    session::with_session(|state| {
        state.selection.clear();
        render::set_status(doc, render::SELECTION_STATUS_ID, &state.selection.summary());
        render::set_status(doc, render::RECORDING_STATUS_ID, &state.recorder.status_line());
    });
    Ok(())
}

/// Render an extraction response that JS fetched itself.
#[wasm_bindgen(js_name = renderExtraction)]
pub fn render_extraction(payload: JsValue) -> Result<(), JsValue> {
    let response: ExtractionResponse = helpers::deserialize(payload, "extraction payload")?;
    wasm_info!(
        "renderExtraction: {} info pairs, {} blocks, error={}",
        response.general_info.len(),
        response.marksheet_blocks.len(),
        response.is_error()
    );
    apply_response(&document()?, &response)
}

/// Render an extraction response delivered as a JSON string.
#[wasm_bindgen(js_name = renderExtractionJson)]
pub fn render_extraction_json(text: &str) -> Result<(), JsValue> {
    let response = ExtractionResponse::from_json(text)?;
    apply_response(&document()?, &response)
}

/// Upload a document to the extraction endpoint and render the result.
///
/// Multipart POST with the file under `pdf` and an optional `count` field.
/// One-shot: no retry, no timeout, no cancellation. If a second upload
/// starts while this one is in flight, whichever response lands last wins.
/// Any failure (network, non-JSON body, truthy `error` field) renders the
/// no-data placeholder.
#[wasm_bindgen(js_name = extractDocument)]
pub async fn extract_document(file: web_sys::File, count: Option<String>) -> Result<(), JsValue> {
    wasm_info!("extractDocument called: file='{}'", file.name());
    let doc = document()?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename("pdf", &file, &file.name())?;
    if let Some(count) = count {
        let count = count.trim();
        if !count.is_empty() {
            form.append_with_str("count", count)?;
        }
    }

    let response = match post_extraction(&form).await {
        Ok(response) => response,
        Err(err) => {
            wasm_warn!("extraction request failed: {:?}", err);
            ExtractionResponse {
                error: Some(serde_json::Value::Bool(true)),
                ..Default::default()
            }
        }
    };
    apply_response(&doc, &response)
}

async fn post_extraction(form: &FormData) -> Result<ExtractionResponse, JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("no window available"))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form);

    let response_value =
        JsFuture::from(window.fetch_with_str_and_init(EXTRACT_ENDPOINT, &init)).await?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| js_error("fetch did not return a Response"))?;
    let json = JsFuture::from(response.json()?).await?;
    helpers::deserialize(json, "extraction response")
}

// ============================================================================
// File registry
// ============================================================================

/// Register a picked file. Returns `false` (and leaves the registry
/// unchanged) for anything that is not a PDF.
#[wasm_bindgen(js_name = addFile)]
pub fn add_file(name: String, size: Option<f64>) -> bool {
    session::with_session(|state| match state.files.add(name, size) {
        Ok(()) => true,
        Err(err) => {
            wasm_warn!("{}", err);
            false
        }
    })
}

/// Remove one file by name; `true` if it was present.
#[wasm_bindgen(js_name = removeFile)]
pub fn remove_file(name: &str) -> bool {
    session::with_session(|state| state.files.remove(name))
}

/// Drop all registered files; returns how many were removed.
#[wasm_bindgen(js_name = clearFiles)]
pub fn clear_files() -> usize {
    session::with_session(|state| state.files.clear())
}

/// All registered files, sorted by name, as a JS array of `{name, size}`.
#[wasm_bindgen(js_name = listFiles)]
pub fn list_files() -> Result<js_sys::Array, JsValue> {
    session::with_session(|state| {
        let result = js_sys::Array::new();
        for entry in state.files.list() {
            result.push(&helpers::serialize(entry, "file entry")?);
        }
        Ok(result)
    })
}
