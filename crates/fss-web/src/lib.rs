#![cfg(target_arch = "wasm32")]
//! WASM glue between the studio core and the page: UI ports, DOM panels,
//! the runner-script fetch and the archive download.

mod dom;
mod download;
mod events;
mod ports;

use std::cell::RefCell;
use std::rc::Rc;

use fss_core::{
    build_scene_archive, Studio, UiRequest, ARCHIVE_FILE_NAME, RUNNER_SCRIPT_PATH,
};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::ports::Ports;

struct App {
    studio: Studio,
    ports: Ports,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fss-web starting");
    Ok(())
}

/// Handle the page keeps after connecting its ports. Everything the UI can
/// ask for goes through here.
#[wasm_bindgen]
pub struct StudioHandle {
    app: Rc<RefCell<App>>,
}

/// Register the UI's port functions and bring the studio up: announce the
/// default layers, record the window viewport and build every scene.
#[wasm_bindgen]
pub fn connect_ports(ports: JsValue) -> Result<StudioHandle, JsValue> {
    let ports = Ports::from_js(&ports).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let seed = js_sys::Date::now() as u64;
    let app = Rc::new(RefCell::new(App {
        studio: Studio::with_default_layers(seed),
        ports,
    }));

    {
        let App { studio, ports } = &mut *app.borrow_mut();
        studio.startup(window_viewport(), ports);
    }

    wire_panels(&app);
    events::wire_space_toggle();

    log::info!("[studio] connected, seed {}", seed);
    Ok(StudioHandle { app })
}

#[wasm_bindgen]
impl StudioHandle {
    /// Serialize the current state and show it in the export panel.
    pub fn request_export(&self, ui_state: String) {
        let App { studio, ports } = &mut *self.app.borrow_mut();
        match studio.handle_request(UiRequest::Export(ui_state), ports) {
            Ok(json) => {
                if let Some(document) = dom::window_document() {
                    dom::set_textarea_value(&document, "export-code", &json);
                    dom::show_panel(&document, "export-target");
                }
            }
            Err(e) => log::error!("[export] {}", e),
        }
    }

    /// Serialize the current state and download it as a runnable archive.
    pub fn request_export_zip(&self, ui_state: String) {
        let app = self.app.clone();
        spawn_local(async move {
            if let Err(e) = export_zip(&app, ui_state).await {
                log::error!("[zip] {}", e);
                dom::alert(e.user_message());
            }
        });
    }

    /// Run an import from the import panel's textarea.
    pub fn request_import(&self) {
        let raw = dom::window_document()
            .map(|document| dom::textarea_value(&document, "import-code"))
            .unwrap_or_default();
        run_import(&self.app, &raw);
    }

    /// Swap a layer's accent colors from the palette picker.
    pub fn update_colors(&self, index: usize, ambient: String, diffuse: String) {
        let App { studio, ports } = &mut *self.app.borrow_mut();
        studio.update_colors(index, [ambient.as_str(), diffuse.as_str()], ports);
    }

    /// Record a new viewport and rebuild every mirrored layer against it.
    pub fn resize(&self, width: f32, height: f32) {
        let App { studio, ports } = &mut *self.app.borrow_mut();
        studio.resize([width, height]);
        studio.rebuild_all(ports);
    }
}

async fn export_zip(app: &Rc<RefCell<App>>, ui_state: String) -> fss_core::Result<()> {
    // Fetch first: a missing runner aborts before anything is serialized.
    let runner = download::fetch_bytes(RUNNER_SCRIPT_PATH).await?;
    let started = Instant::now();
    let scene_json = {
        let App { studio, ports } = &mut *app.borrow_mut();
        studio.handle_request(UiRequest::ExportZip(ui_state), ports)?
    };
    let bytes = build_scene_archive(&runner, &scene_json)?;
    log::info!(
        "[zip] archive built in {} ms ({} bytes)",
        started.elapsed().as_millis(),
        bytes.len()
    );
    download::save_bytes(&bytes, ARCHIVE_FILE_NAME)?;
    Ok(())
}

fn run_import(app: &Rc<RefCell<App>>, raw: &str) {
    if raw.is_empty() {
        dom::alert("Nothing to import");
        return;
    }
    let App { studio, ports } = &mut *app.borrow_mut();
    match studio.import(raw, ports) {
        Ok(fragment) => dom::set_location_hash(&fragment),
        Err(e) => {
            log::error!("[import] {}", e);
            dom::alert(e.user_message());
        }
    }
}

fn wire_panels(app: &Rc<RefCell<App>>) {
    let Some(document) = dom::window_document() else {
        return;
    };

    dom::add_click_listener(&document, "close-export", || {
        if let Some(document) = dom::window_document() {
            dom::hide_panel(&document, "export-target");
        }
    });
    dom::add_click_listener(&document, "close-import", || {
        if let Some(document) = dom::window_document() {
            dom::hide_panel(&document, "import-target");
        }
    });
    dom::add_click_listener(&document, "import-button", || {
        if let Some(document) = dom::window_document() {
            dom::show_panel(&document, "import-target");
        }
    });

    let import_app = app.clone();
    dom::add_click_listener(&document, "import", move || {
        let raw = dom::window_document()
            .map(|document| dom::textarea_value(&document, "import-code"))
            .unwrap_or_default();
        run_import(&import_app, &raw);
    });
}

fn window_viewport() -> [f32; 2] {
    let Some(window) = web::window() else {
        return [0.0, 0.0];
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    [width as f32, height as f32]
}
