//! Wire format of exported scene state.
//!
//! An export is the UI's own state (`theta`, `size`, `mouse`, `now`, blend
//! names) enriched with the studio's per-layer configs and geometry fuzz.
//! The reduced [`ImportPayload`] is what goes back through the UI's import
//! port; configs are blanked there because full configs follow per layer on
//! the configure port.

use serde::{Deserialize, Serialize};

use crate::config::LayerConfig;
use crate::constants::BLENDS_FRAGMENT_PREFIX;
use crate::error::Result;
use crate::registry::LayerKind;
use crate::scene::VertexFuzz;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportedState {
    pub theta: f64,
    pub size: [i32; 2],
    pub mouse: [i32; 2],
    pub now: f64,
    pub layers: Vec<ExportedLayer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportedLayer {
    #[serde(rename = "type")]
    pub kind: LayerKind,
    #[serde(default)]
    pub blend: String,
    /// Absent for layers with nothing stored. Tolerates `null` and `""` on
    /// input since the UI blanks configs that way.
    #[serde(
        default,
        deserialize_with = "lenient_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub config: Option<LayerConfig>,
    /// Always serialized; `null` marks a layer that carries no geometry.
    #[serde(rename = "sceneFuzz", default)]
    pub scene_fuzz: Option<Vec<VertexFuzz>>,
}

impl ExportedState {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The export format shown to the user: pretty-printed, two-space indent.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Colon-joined blend names as a URL fragment, e.g. `#blends=normal:screen`.
    pub fn blends_fragment(&self) -> String {
        let blends: Vec<&str> = self.layers.iter().map(|l| l.blend.as_str()).collect();
        format!("{}{}", BLENDS_FRAGMENT_PREFIX, blends.join(":"))
    }
}

/// Reduced state pushed through the UI's import port.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportPayload {
    pub theta: f64,
    pub size: [i32; 2],
    pub mouse: [i32; 2],
    pub now: f64,
    pub layers: Vec<ImportPayloadLayer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportPayloadLayer {
    #[serde(rename = "type_")]
    pub kind: LayerKind,
    pub blend: String,
    pub config: String,
}

impl ImportPayload {
    pub fn from_state(state: &ExportedState) -> Self {
        Self {
            theta: state.theta,
            size: state.size,
            mouse: state.mouse,
            now: state.now,
            layers: state
                .layers
                .iter()
                .map(|layer| ImportPayloadLayer {
                    kind: layer.kind,
                    blend: layer.blend.clone(),
                    config: String::new(),
                })
                .collect(),
        }
    }

    /// Compact JSON, the way the import port expects it.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn lenient_config<'de, D>(deserializer: D) -> std::result::Result<Option<LayerConfig>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Config(LayerConfig),
        Blank(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Config(config)) => Ok(Some(config)),
        Some(Raw::Blank(s)) if s.is_empty() => Ok(None),
        Some(Raw::Blank(_)) => Err(serde::de::Error::custom(
            "expected a layer config, null or an empty string",
        )),
    }
}
