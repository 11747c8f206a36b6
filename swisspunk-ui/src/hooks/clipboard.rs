//! Best-effort clipboard writes.
//!
//! Uses `navigator.clipboard.writeText` when the browser exposes it, otherwise
//! falls back to selecting a hidden textarea and `execCommand("copy")`.

use leptos::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

pub fn copy_to_clipboard(text: &str) {
    if write_with_clipboard_api(text).is_ok() {
        return;
    }
    if let Err(e) = copy_with_textarea(text) {
        log::warn!("Clipboard copy failed: {:?}", e);
    }
}

/// Starts the async write; errors only if the API is missing.
fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let navigator = window().navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("navigator.clipboard unavailable"));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("navigator.clipboard.writeText rejected: {:?}", e);
        }
    });
    Ok(())
}

fn copy_with_textarea(text: &str) -> Result<(), JsValue> {
    let document = document();
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    textarea.set_value(text);
    body.append_child(&textarea)?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("not an HTML document"))
        .and_then(|html| html.exec_command("copy"));

    body.remove_child(&textarea)?;
    copied.map(|_| ())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn textarea_fallback_cleans_up() {
        // execCommand may refuse without a user gesture; the node must still go away
        let _ = copy_with_textarea("#FF0080");
        assert!(document().query_selector("textarea").unwrap().is_none());
    }
}
