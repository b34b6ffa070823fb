//! Procedural plane geometry for mirrored FSS layers.
//!
//! A scene is a grid of triangated-plane vertices plus the lights that shade
//! it. Fresh builds jitter every vertex from a seeded RNG; feeding a recorded
//! fuzz list back in reproduces the exact same geometry, which is what makes
//! exports replayable.

use glam::Vec3;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::LayerConfig;
use crate::constants::LIGHT_ELEVATION;

/// The per-vertex randomness of one vertex, enough to rebuild it exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexFuzz {
    pub v0: Vec3,
    pub time: f32,
    pub anchor: Vec3,
    pub gradient: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneVertex {
    pub position: Vec3,
    pub v0: Vec3,
    pub time: f32,
    pub anchor: Vec3,
    pub gradient: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneGeometry {
    pub width: f32,
    pub height: f32,
    pub segments: u32,
    pub slices: u32,
    pub vertices: Vec<SceneVertex>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneMesh {
    pub material: [String; 2],
    pub mirror: f32,
    pub geometry: SceneGeometry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneLight {
    pub ambient: String,
    pub diffuse: String,
    pub position: Vec3,
}

/// Renderable state of one layer as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub lights: SmallVec<[SceneLight; 4]>,
    pub meshes: Vec<SceneMesh>,
}

impl SceneSnapshot {
    /// Extract the per-vertex randomness of the primary mesh.
    pub fn export_fuzz(&self) -> Vec<VertexFuzz> {
        self.meshes
            .first()
            .map(|mesh| {
                mesh.geometry
                    .vertices
                    .iter()
                    .map(|v| VertexFuzz {
                        v0: v.v0,
                        time: v.time,
                        anchor: v.anchor,
                        gradient: v.gradient,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Builds scene snapshots from layer configs. Owns the RNG so repeated builds
/// from one seed form a deterministic stream.
pub struct SceneBuilder {
    rng: StdRng,
}

impl SceneBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the geometry for `config`. `size_override` takes the place of
    /// `config.size` when the layer tracks the window viewport. Entries of
    /// `fuzz` override the RNG vertex for vertex; vertices past the end of
    /// the list fall back to fresh randomness.
    pub fn build(
        &mut self,
        config: &LayerConfig,
        size_override: Option<[f32; 2]>,
        fuzz: Option<&[VertexFuzz]>,
    ) -> SceneSnapshot {
        let [width, height] = size_override.unwrap_or(config.size);
        let segments = config.faces[0].max(1);
        let slices = config.faces[1].max(1);
        let cell_w = width / segments as f32;
        let cell_h = height / slices as f32;

        let mut vertices = Vec::with_capacity(((segments + 1) * (slices + 1)) as usize);
        for row in 0..=slices {
            for col in 0..=segments {
                let anchor = Vec3::new(
                    col as f32 * cell_w - width * 0.5,
                    row as f32 * cell_h - height * 0.5,
                    0.0,
                );
                let index = (row * (segments + 1) + col) as usize;
                let vertex = match fuzz.and_then(|f| f.get(index)) {
                    Some(f) => SceneVertex {
                        position: f.v0,
                        v0: f.v0,
                        time: f.time,
                        anchor: f.anchor,
                        gradient: f.gradient,
                    },
                    None => {
                        let jitter = Vec3::new(
                            (self.rng.gen::<f32>() - 0.5) * config.x_range * cell_w,
                            (self.rng.gen::<f32>() - 0.5) * config.y_range * cell_h,
                            0.0,
                        );
                        let v0 = anchor + jitter;
                        SceneVertex {
                            position: v0,
                            v0,
                            time: self.rng.gen::<f32>() * std::f32::consts::TAU,
                            anchor,
                            gradient: self.rng.gen::<f32>(),
                        }
                    }
                };
                vertices.push(vertex);
            }
        }

        let lights = (0..config.lights.count)
            .map(|i| {
                let pick = (i % 2) as usize;
                let side = if i % 2 == 0 { -1.0 } else { 1.0 };
                SceneLight {
                    ambient: config.lights.ambient[pick].clone(),
                    diffuse: config.lights.diffuse[pick].clone(),
                    position: Vec3::new(side * width * 0.25, height * 0.25, LIGHT_ELEVATION),
                }
            })
            .collect();

        SceneSnapshot {
            lights,
            meshes: vec![SceneMesh {
                material: config.material.clone(),
                mirror: config.mirror,
                geometry: SceneGeometry {
                    width,
                    height,
                    segments,
                    slices,
                    vertices,
                },
            }],
        }
    }
}
