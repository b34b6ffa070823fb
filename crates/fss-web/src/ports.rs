//! The UI's port functions, looked up once at connect time. Payloads cross
//! the boundary as plain JS values parsed from JSON.

use anyhow::anyhow;
use fss_core::{CommandSink, UiCommand};
use wasm_bindgen::{JsCast, JsValue};

pub struct Ports {
    pause: js_sys::Function,
    init_layers: js_sys::Function,
    import: js_sys::Function,
    configure_mirrored_fss: js_sys::Function,
    rebuild_fss: js_sys::Function,
}

impl Ports {
    pub fn from_js(object: &JsValue) -> anyhow::Result<Self> {
        Ok(Self {
            pause: port(object, "pause")?,
            init_layers: port(object, "initLayers")?,
            import: port(object, "import_")?,
            configure_mirrored_fss: port(object, "configureMirroredFss")?,
            rebuild_fss: port(object, "rebuildFss")?,
        })
    }
}

fn port(object: &JsValue, name: &str) -> anyhow::Result<js_sys::Function> {
    js_sys::Reflect::get(object, &JsValue::from_str(name))
        .map_err(|_| anyhow!("ports object is missing {name}"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| anyhow!("ports.{name} is not a function"))
}

fn call_json<T: serde::Serialize>(
    function: &js_sys::Function,
    payload: &T,
) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(payload).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let value = js_sys::JSON::parse(&json)?;
    function.call1(&JsValue::NULL, &value)
}

impl CommandSink for Ports {
    fn send(&mut self, command: UiCommand) {
        let name = command.port_name();
        let result = match &command {
            UiCommand::Pause => self.pause.call1(&JsValue::NULL, &JsValue::NULL),
            UiCommand::InitLayers(kinds) => call_json(&self.init_layers, kinds),
            UiCommand::Import(payload) => self
                .import
                .call1(&JsValue::NULL, &JsValue::from_str(payload)),
            UiCommand::ConfigureMirroredFss(config, index) => {
                call_json(&self.configure_mirrored_fss, &(config, index))
            }
            UiCommand::RebuildFss(scene, index) => call_json(&self.rebuild_fss, &(scene, index)),
        };
        if let Err(e) = result {
            log::error!("[ports] {} failed: {:?}", name, e);
        }
    }
}
