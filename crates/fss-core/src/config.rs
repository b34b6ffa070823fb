//! Per-layer configuration as the UI and the wire format see it.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AMBIENT, DEFAULT_DIFFUSE, DEFAULT_FACES, DEFAULT_LIGHT_COUNT, DEFAULT_MATERIAL,
    DEFAULT_MIRROR, DEFAULT_SIZE, DEFAULT_X_RANGE, DEFAULT_Y_RANGE,
};

/// Light colors for a layer. Each pair holds a base color and an accent;
/// light i picks entry i % 2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub ambient: [String; 2],
    pub diffuse: [String; 2],
    pub count: u32,
}

/// Everything a mirrored FSS layer needs to rebuild its geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    pub lights: LightConfig,
    pub material: [String; 2],
    pub x_range: f32,
    pub y_range: f32,
    pub size: [f32; 2],
    pub faces: [u32; 2],
    pub mirror: f32,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            lights: LightConfig {
                ambient: [DEFAULT_AMBIENT[0].to_string(), DEFAULT_AMBIENT[1].to_string()],
                diffuse: [DEFAULT_DIFFUSE[0].to_string(), DEFAULT_DIFFUSE[1].to_string()],
                count: DEFAULT_LIGHT_COUNT,
            },
            material: [DEFAULT_MATERIAL[0].to_string(), DEFAULT_MATERIAL[1].to_string()],
            x_range: DEFAULT_X_RANGE,
            y_range: DEFAULT_Y_RANGE,
            size: DEFAULT_SIZE,
            faces: DEFAULT_FACES,
            mirror: DEFAULT_MIRROR,
        }
    }
}

impl LayerConfig {
    /// Default config with the accent colors swapped out, the shape the
    /// palette picker sends.
    pub fn with_accents(ambient: &str, diffuse: &str) -> Self {
        let mut config = Self::default();
        config.lights.ambient[1] = ambient.to_string();
        config.lights.diffuse[1] = diffuse.to_string();
        config
    }
}
