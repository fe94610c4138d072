use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::util::easing::EasingFunction;

/// Smallest orbit distance accepted regardless of configuration.
pub const MIN_ORBIT_DISTANCE: f32 = 0.01;

/// Largest pitch magnitude; the fixed up vector must never align with the
/// view direction.
pub const MAX_PITCH_LIMIT: f32 = 89.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Degrees of orbit per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Fraction of the distance removed per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the camera may get to its focus point.
    #[schemars(title = "Minimum Distance", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Largest absolute pitch in degrees.
    #[schemars(skip)]
    pub pitch_limit: f32,
    /// Seconds a preset transition takes.
    #[schemars(title = "Transition Time", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub transition_secs: f32,
    /// Transition easing curve.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Turntable rate in degrees per second while idle spin is on.
    #[schemars(title = "Idle Spin", range(min = 0.0, max = 120.0), extend("step" = 1.0))]
    pub idle_spin_deg_per_sec: f32,
    /// Whether idle spin is on at startup.
    pub idle_spin_on_start: bool,
    /// Pose used at startup and by the reset command.
    #[schemars(skip)]
    pub home: CameraPose,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 0.1,
            zfar: 100.0,
            rotate_speed: 0.3,
            zoom_speed: 0.1,
            min_distance: 1.5,
            pitch_limit: 89.0,
            transition_secs: 0.5,
            easing: EasingFunction::SmoothStep,
            idle_spin_deg_per_sec: 30.0,
            idle_spin_on_start: false,
            home: CameraPose::DEFAULT,
        }
    }
}

impl CameraOptions {
    /// Replace values that would break the orbit camera.
    ///
    /// `min_distance` is raised to at least the near plane (and a small
    /// positive floor), so zoom can never collapse the eye onto the focus
    /// point or push it through. `pitch_limit` is kept within
    /// `[0, 89]` degrees.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let floor = if self.znear.is_finite() {
            self.znear.max(MIN_ORBIT_DISTANCE)
        } else {
            MIN_ORBIT_DISTANCE
        };
        if self.min_distance.is_nan() || self.min_distance < floor {
            log::warn!(
                "camera min_distance {} below {floor}; using {floor}",
                self.min_distance
            );
            self.min_distance = floor;
        }
        self.pitch_limit = if self.pitch_limit.is_nan() {
            MAX_PITCH_LIMIT
        } else {
            self.pitch_limit.clamp(0.0, MAX_PITCH_LIMIT)
        };
        self
    }
}
