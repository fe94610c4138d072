//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a key press, a mouse
//! gesture, or a programmatic call, is a [`ViewerCommand`]. Consumers
//! construct commands and pass them to
//! [`SceneComposer::execute`](super::SceneComposer::execute).

use glam::Vec2;

use crate::camera::ViewMode;
use crate::input::KeyAction;

/// A single viewer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Stop the frame loop after the current frame.
    Quit,
    /// Orbit the camera by a pointer delta in pixels.
    RotateCamera {
        /// Horizontal and vertical drag distance.
        delta: Vec2,
    },
    /// Zoom by scroll units (positive = closer).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Blend to the next preset.
    NextPreset,
    /// Blend to the previous preset.
    PreviousPreset,
    /// Flip between free and preset camera modes.
    ToggleCameraMode,
    /// Blend back to the home pose.
    ResetCamera,
    /// Advance to the next view mode.
    CycleViewMode,
    /// Switch to a specific view mode.
    SetViewMode(ViewMode),
    /// Start/stop the idle turntable.
    ToggleIdleSpin,
    /// Pause/resume procedural motion.
    ToggleAnimation,
}

impl From<KeyAction> for ViewerCommand {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::NextPreset => Self::NextPreset,
            KeyAction::PreviousPreset => Self::PreviousPreset,
            KeyAction::ToggleCameraMode => Self::ToggleCameraMode,
            KeyAction::ResetCamera => Self::ResetCamera,
            KeyAction::CycleViewMode => Self::CycleViewMode,
            KeyAction::ViewKnight => Self::SetViewMode(ViewMode::Knight),
            KeyAction::ViewDemon => Self::SetViewMode(ViewMode::Demon),
            KeyAction::ViewVersus => Self::SetViewMode(ViewMode::Versus),
            KeyAction::ToggleIdleSpin => Self::ToggleIdleSpin,
            KeyAction::ToggleAnimation => Self::ToggleAnimation,
            KeyAction::Quit => Self::Quit,
        }
    }
}
