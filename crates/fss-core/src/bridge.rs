//! Typed boundary between the studio and the reactive UI application.
//!
//! The UI registers one port function per outbound command; the studio never
//! calls back into the UI except through a [`CommandSink`]. Requests travel
//! the other way as [`UiRequest`] values.

use crate::config::LayerConfig;
use crate::registry::LayerKind;
use crate::scene::SceneSnapshot;

/// Commands pushed to the UI. Order matters: the UI applies them in the
/// order received, and later commands assume earlier ones already took
/// effect.
#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    Pause,
    InitLayers(Vec<LayerKind>),
    Import(String),
    ConfigureMirroredFss(LayerConfig, usize),
    RebuildFss(SceneSnapshot, usize),
}

impl UiCommand {
    /// Name of the port the UI registered for this command.
    pub fn port_name(&self) -> &'static str {
        match self {
            UiCommand::Pause => "pause",
            UiCommand::InitLayers(_) => "initLayers",
            UiCommand::Import(_) => "import_",
            UiCommand::ConfigureMirroredFss(..) => "configureMirroredFss",
            UiCommand::RebuildFss(..) => "rebuildFss",
        }
    }
}

/// Requests arriving from the UI, each carrying the UI's serialized view of
/// its own state.
#[derive(Clone, Debug, PartialEq)]
pub enum UiRequest {
    Export(String),
    ExportZip(String),
}

pub trait CommandSink {
    fn send(&mut self, command: UiCommand);
}

/// Sink that remembers every command, for tests and the native harness.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<UiCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl CommandSink for CommandRecorder {
    fn send(&mut self, command: UiCommand) {
        self.commands.push(command);
    }
}
