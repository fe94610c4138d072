//! Camera system for character viewing.
//!
//! Provides an orbit camera with free rotation, clamped zoom, preset
//! cycling filtered by view mode, smooth preset transitions, and an idle
//! turntable.

/// Core camera struct and view/projection matrices.
pub mod core;
/// Camera poses, named presets, and the preset table.
pub mod preset;
/// Orbit state machine driving free and preset modes.
pub mod rig;
/// Timed blending between camera poses.
pub mod transition;

pub use self::core::{orbit_direction, Camera};
pub use preset::{CameraPose, CameraPreset, FocusTag, PresetTable, ViewMode};
pub use rig::{CameraMode, CameraRig, CameraState};
pub use transition::{interpolate, CameraTransition, DEFAULT_TRANSITION_SECS};
