//! Ordered list of layer slots. Layers are addressed by index; an import
//! replaces the whole list.

use serde::{Deserialize, Serialize};

use crate::config::LayerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    FssMirror,
    Text,
}

impl LayerKind {
    #[inline]
    pub fn is_mirror(self) -> bool {
        matches!(self, LayerKind::FssMirror)
    }
}

/// One layer: its kind, its last stored config (text layers have none) and
/// the window viewport recorded on resize.
#[derive(Clone, Debug)]
pub struct LayerSlot {
    pub kind: LayerKind,
    pub config: Option<LayerConfig>,
    pub viewport: Option<[f32; 2]>,
}

#[derive(Clone, Debug, Default)]
pub struct LayerRegistry {
    slots: Vec<LayerSlot>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LayerKind, config: Option<LayerConfig>) {
        self.slots.push(LayerSlot {
            kind,
            config,
            viewport: None,
        });
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LayerSlot> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LayerSlot> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &LayerSlot)> + '_ {
        self.slots.iter().enumerate()
    }

    /// Layer kinds in display order, the payload of the init announcement.
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.slots.iter().map(|slot| slot.kind).collect()
    }

    /// Remember the window viewport on every slot. Builds pick it up in
    /// place of the configured size.
    pub fn record_viewport(&mut self, viewport: [f32; 2]) {
        for slot in &mut self.slots {
            slot.viewport = Some(viewport);
        }
    }

    pub fn replace_all(&mut self, slots: Vec<LayerSlot>) {
        self.slots = slots;
    }
}
