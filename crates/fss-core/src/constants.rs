// Shared tuning constants used by the studio core and both frontends.

// Default layer configuration
pub const DEFAULT_AMBIENT: [&str; 2] = ["#000000", "#f45b69"];
pub const DEFAULT_DIFFUSE: [&str; 2] = ["#000000", "#e4fde1"];
pub const DEFAULT_MATERIAL: [&str; 2] = ["#ffffff", "#ffffff"];
pub const DEFAULT_LIGHT_COUNT: u32 = 2;
pub const DEFAULT_X_RANGE: f32 = 0.8; // horizontal jitter as a fraction of one cell
pub const DEFAULT_Y_RANGE: f32 = 0.1; // vertical jitter as a fraction of one cell
pub const DEFAULT_SIZE: [f32; 2] = [1550.0, 1200.0];
pub const DEFAULT_FACES: [u32; 2] = [12, 15]; // segments x slices
pub const DEFAULT_MIRROR: f32 = 0.5;

// Accent colors the second startup layer swaps in
pub const LAYER_TWO_AMBIENT_ACCENT: &str = "#4b4e76";
pub const LAYER_TWO_DIFFUSE_ACCENT: &str = "#fb4e76";

// Scene lights
pub const LIGHT_ELEVATION: f32 = 100.0; // z height of lights above the plane

// Archive layout
pub const RUNNER_SCRIPT_PATH: &str = "./run-json-scene.js";
pub const RUNNER_ENTRY_NAME: &str = "js/run-json-scene.js";
pub const SCENE_ENTRY_NAME: &str = "scene.js";
pub const ARCHIVE_FILE_NAME: &str = "export.zip";

// URL fragment carrying the per-layer blend list
pub const BLENDS_FRAGMENT_PREFIX: &str = "#blends=";
