use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const SPACE_KEY_CODE: u32 = 32;

/// Space toggles every element carrying the `hide-on-space` class, so the
/// overlay panels can get out of the way of the artwork.
pub fn wire_space_toggle() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let target = document.clone();
    let mut panels_hidden = false;
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key_code() != SPACE_KEY_CODE {
            return;
        }
        let display = if panels_hidden { "block" } else { "none" };
        if let Ok(panels) = target.query_selector_all(".hide-on-space") {
            for i in 0..panels.length() {
                if let Some(el) = panels.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
                {
                    let _ = el.style().set_property("display", display);
                }
            }
        }
        panels_hidden = !panels_hidden;
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
