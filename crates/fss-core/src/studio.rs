//! The studio controller: owns the layer registry, the per-layer scene cache
//! and the geometry builder. Every state operation goes through here; there
//! are no ambient globals.

use fnv::FnvHashMap;

use crate::bridge::{CommandSink, UiCommand, UiRequest};
use crate::codec::{ExportedState, ImportPayload};
use crate::config::LayerConfig;
use crate::constants::{LAYER_TWO_AMBIENT_ACCENT, LAYER_TWO_DIFFUSE_ACCENT};
use crate::error::Result;
use crate::registry::{LayerKind, LayerRegistry, LayerSlot};
use crate::scene::{SceneBuilder, SceneSnapshot};

pub struct Studio {
    layers: LayerRegistry,
    scenes: FnvHashMap<usize, SceneSnapshot>,
    builder: SceneBuilder,
}

impl Studio {
    pub fn new(seed: u64) -> Self {
        Self {
            layers: LayerRegistry::new(),
            scenes: FnvHashMap::default(),
            builder: SceneBuilder::new(seed),
        }
    }

    /// The startup setup: two mirrored planes with distinct accent colors
    /// plus a text layer on top.
    pub fn with_default_layers(seed: u64) -> Self {
        let mut studio = Self::new(seed);
        studio
            .layers
            .push(LayerKind::FssMirror, Some(LayerConfig::default()));
        studio.layers.push(
            LayerKind::FssMirror,
            Some(LayerConfig::with_accents(
                LAYER_TWO_AMBIENT_ACCENT,
                LAYER_TWO_DIFFUSE_ACCENT,
            )),
        );
        studio.layers.push(LayerKind::Text, None);
        studio
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    /// Cached scene for a layer, if one has been built.
    pub fn scene(&self, index: usize) -> Option<&SceneSnapshot> {
        self.scenes.get(&index)
    }

    /// Announce the layer kinds and build the first round of geometry.
    pub fn startup(&mut self, viewport: [f32; 2], sink: &mut impl CommandSink) {
        sink.send(UiCommand::InitLayers(self.layers.kinds()));
        self.resize(viewport);
        self.rebuild_all(sink);
    }

    /// Rebuild one layer from `config`: notify the UI, then store an owned
    /// copy of the config and cache the scene. The scene is cached even when
    /// the index has no slot.
    pub fn update_layer(&mut self, index: usize, config: LayerConfig, sink: &mut impl CommandSink) {
        let viewport = self.layers.get(index).and_then(|slot| slot.viewport);
        let scene = self.builder.build(&config, viewport, None);
        sink.send(UiCommand::ConfigureMirroredFss(config.clone(), index));
        sink.send(UiCommand::RebuildFss(scene.clone(), index));
        if let Some(slot) = self.layers.get_mut(index) {
            slot.config = Some(config);
        }
        self.scenes.insert(index, scene);
    }

    /// Apply `transform` to a copy of every mirrored layer's config and
    /// rebuild it. Other layer kinds are untouched.
    pub fn update_all_layers(
        &mut self,
        mut transform: impl FnMut(&mut LayerConfig),
        sink: &mut impl CommandSink,
    ) {
        let targets: Vec<(usize, LayerConfig)> = self
            .layers
            .iter()
            .filter(|(_, slot)| slot.kind.is_mirror())
            .map(|(index, slot)| (index, slot.config.clone().unwrap_or_default()))
            .collect();
        for (index, mut config) in targets {
            transform(&mut config);
            self.update_layer(index, config, sink);
        }
    }

    /// Swap a layer's accent colors. Deliberately starts from the default
    /// config, discarding any other customization on that layer.
    pub fn update_colors(&mut self, index: usize, colors: [&str; 2], sink: &mut impl CommandSink) {
        self.update_layer(index, LayerConfig::with_accents(colors[0], colors[1]), sink);
    }

    /// Record the window viewport on every layer. Nothing is recomputed
    /// until the next rebuild.
    pub fn resize(&mut self, viewport: [f32; 2]) {
        self.layers.record_viewport(viewport);
    }

    /// Rebuild every mirrored layer from its stored config.
    pub fn rebuild_all(&mut self, sink: &mut impl CommandSink) {
        self.update_all_layers(|_| {}, sink);
    }

    /// Serialize the full state. The UI's own fields pass through; configs
    /// and geometry fuzz come from this studio. Pauses the UI first so the
    /// export reflects a frozen state.
    pub fn export(&mut self, ui_state: &str, sink: &mut impl CommandSink) -> Result<String> {
        sink.send(UiCommand::Pause);
        let mut state = ExportedState::parse(ui_state)?;
        for (index, layer) in state.layers.iter_mut().enumerate() {
            layer.config = self.layers.get(index).and_then(|slot| slot.config.clone());
            if let Some(config) = &layer.config {
                log::info!(
                    "[export] layer {} ambient {:?} diffuse {:?}",
                    index,
                    config.lights.ambient,
                    config.lights.diffuse
                );
            }
            layer.scene_fuzz = if layer.kind.is_mirror() {
                Some(match self.scenes.get(&index) {
                    Some(scene) => scene.export_fuzz(),
                    // Nothing cached yet: a throwaway build keeps the export
                    // self-contained. It is not stored.
                    None => {
                        let config = layer.config.clone().unwrap_or_default();
                        let viewport = self.layers.get(index).and_then(|slot| slot.viewport);
                        self.builder.build(&config, viewport, None).export_fuzz()
                    }
                })
            } else {
                None
            };
        }
        state.to_pretty_json()
    }

    /// Replace all state from an exported scene string and notify the UI.
    /// Commands go out in a fixed order the UI relies on: pause, layer
    /// kinds, reduced state, then configure + rebuild per mirrored layer.
    /// Returns the `#blends=...` fragment for the page URL.
    pub fn import(&mut self, raw: &str, sink: &mut impl CommandSink) -> Result<String> {
        let state = ExportedState::parse(raw)?;

        self.scenes.clear();
        self.layers.replace_all(
            state
                .layers
                .iter()
                .map(|layer| LayerSlot {
                    kind: layer.kind,
                    config: layer.config.clone(),
                    viewport: None,
                })
                .collect(),
        );

        sink.send(UiCommand::Pause);
        sink.send(UiCommand::InitLayers(self.layers.kinds()));
        sink.send(UiCommand::Import(
            ImportPayload::from_state(&state).to_json()?,
        ));

        for (index, layer) in state.layers.iter().enumerate() {
            if !layer.kind.is_mirror() {
                continue;
            }
            let config = layer.config.clone().unwrap_or_default();
            let scene = self
                .builder
                .build(&config, None, layer.scene_fuzz.as_deref());
            self.scenes.insert(index, scene.clone());
            sink.send(UiCommand::ConfigureMirroredFss(config, index));
            sink.send(UiCommand::RebuildFss(scene, index));
        }

        let fragment = state.blends_fragment();
        log::info!(
            "[import] {} layers, fragment {}",
            state.layers.len(),
            fragment
        );
        Ok(fragment)
    }

    /// Resolve a UI request to its scene JSON. For an archive request the
    /// caller bundles the result with the runner script.
    pub fn handle_request(
        &mut self,
        request: UiRequest,
        sink: &mut impl CommandSink,
    ) -> Result<String> {
        match request {
            UiRequest::Export(state) | UiRequest::ExportZip(state) => self.export(&state, sink),
        }
    }
}
