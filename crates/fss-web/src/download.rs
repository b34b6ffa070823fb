//! Runner-script fetch and blob download, both routed through the studio
//! error type so failures reach the same alert path.

use fss_core::StudioError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::dom;

fn fetch_error(e: JsValue) -> StudioError {
    StudioError::RunnerFetch(format!("{e:?}"))
}

fn archive_error(e: JsValue) -> StudioError {
    StudioError::Archive(format!("{e:?}"))
}

/// Fetch a same-origin resource as raw bytes.
pub async fn fetch_bytes(path: &str) -> fss_core::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| StudioError::RunnerFetch("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(fetch_error)?;
    let response: web::Response = response.dyn_into().map_err(fetch_error)?;
    if !response.ok() {
        return Err(StudioError::RunnerFetch(format!(
            "HTTP {} fetching {}",
            response.status(),
            path
        )));
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Hand bytes to the browser as a named download.
pub fn save_bytes(bytes: &[u8], file_name: &str) -> fss_core::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| StudioError::Archive("no document".into()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web::Blob::new_with_u8_array_sequence(&parts).map_err(archive_error)?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(archive_error)?;

    let anchor: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(archive_error)?
        .dyn_into()
        .map_err(|_| StudioError::Archive("anchor element".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    let _ = web::Url::revoke_object_url(&url);
    Ok(())
}
