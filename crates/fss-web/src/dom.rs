use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Panels toggle via class name: `shown` opens, empty closes.
pub fn show_panel(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_class_name("shown");
    }
}

pub fn hide_panel(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_class_name("");
    }
}

pub fn textarea_value(document: &web::Document, element_id: &str) -> String {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

pub fn set_textarea_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(area) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        area.set_value(value);
    }
}

pub fn set_location_hash(fragment: &str) {
    if let Some(window) = web::window() {
        let _ = window.location().set_hash(fragment);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web::window() {
        let _ = window.alert_with_message(message);
    }
}
