//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (display, camera, glow, animation, layout,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! viewing setup can be saved and shared.

mod animation;
mod camera;
mod display;
mod glow;
mod keybindings;
mod layout;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::{CameraOptions, MAX_PITCH_LIMIT, MIN_ORBIT_DISTANCE};
pub use display::DisplayOptions;
pub use glow::GlowOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DioramaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Window and pacing.
    pub display: DisplayOptions,
    /// Camera projection and control.
    pub camera: CameraOptions,
    /// Emissive parts and pulse.
    pub glow: GlowOptions,
    /// Procedural motion.
    pub animation: AnimationOptions,
    /// Character placement.
    pub layout: LayoutOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DioramaError> {
        let content = std::fs::read_to_string(path).map_err(DioramaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DioramaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DioramaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DioramaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DioramaError::Io)?;
        }
        std::fs::write(path, content).map_err(DioramaError::Io)
    }

    /// List available option presets (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::MotionKind;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
min_distance = 2.5
transition_secs = 1.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.min_distance, 2.5);
        assert_eq!(opts.camera.transition_secs, 1.0);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 40.0);
        assert_eq!(opts.display.target_fps, 60);
        assert_eq!(opts.animation.markers[1].1, MotionKind::Drape);
    }

    #[test]
    fn background_image_is_optional() {
        assert_eq!(Options::default().display.background_image, None);
        let opts: Options =
            toml::from_str("[display]\nbackground_image = \"castle.png\"\n")
                .unwrap();
        assert_eq!(
            opts.display.background_image.as_deref(),
            Some(Path::new("castle.png"))
        );
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowRight"),
            Some(KeyAction::NextPreset)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetCamera));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_keybindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
next_preset = "KeyD"
previous_preset = "KeyA"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyD"), Some(KeyAction::NextPreset));
        assert_eq!(opts.keybindings.lookup("ArrowRight"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("glow"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }

    #[test]
    fn saved_options_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("versus.toml");
        let mut opts = Options {
            layout: LayoutOptions::versus(),
            ..Options::default()
        };
        opts.camera.transition_secs = 1.25;
        opts.keybindings.bind(KeyAction::Quit, "KeyQ");

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
    }

    #[test]
    fn list_presets_returns_sorted_toml_stems() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["turntable.toml", "still.toml", "notes.md"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(Options::list_presets(dir.path()), ["still", "turntable"]);
        assert!(Options::list_presets(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn bundled_presets_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/presets");
        let names = Options::list_presets(&dir);
        assert!(!names.is_empty());
        for name in names {
            let opts = Options::load(&dir.join(format!("{name}.toml"))).unwrap();
            assert_eq!(opts.display, DisplayOptions::default());
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Options::load(Path::new("no/such/options.toml")),
            Err(DioramaError::Io(_))
        ));
    }
}
