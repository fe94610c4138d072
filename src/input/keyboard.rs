use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// next_preset = "ArrowRight"
/// reset_camera = "KeyR"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Blend to the next preset of the current view mode.
    NextPreset,
    /// Blend to the previous preset of the current view mode.
    PreviousPreset,
    /// Flip between free and preset camera modes.
    ToggleCameraMode,
    /// Blend back to the home pose.
    ResetCamera,
    /// Knight → demon → versus.
    CycleViewMode,
    /// Frame the knight.
    ViewKnight,
    /// Frame the demon.
    ViewDemon,
    /// Frame both characters.
    ViewVersus,
    /// Start/stop the idle turntable.
    ToggleIdleSpin,
    /// Pause/resume procedural motion.
    ToggleAnimation,
    /// Leave the viewer.
    Quit,
}
