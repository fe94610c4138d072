//! Orbit camera state machine: free orbiting, preset cycling, and idle spin.

use glam::Vec2;

use super::preset::{CameraPose, CameraPreset, PresetTable, ViewMode};
use super::transition::CameraTransition;
use crate::error::DioramaError;
use crate::options::CameraOptions;

/// Whether the camera is driven by the user or by presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Orbiting under direct mouse control.
    Free,
    /// Resting on, or blending toward, a preset.
    #[default]
    Preset,
}

impl CameraMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Free => Self::Preset,
            Self::Preset => Self::Free,
        }
    }
}

/// Current orbit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Elevation in degrees.
    pub pitch_deg: f32,
    /// Azimuth in degrees.
    pub yaw_deg: f32,
    /// Distance from the focus point.
    pub distance: f32,
    /// Height of the focus point.
    pub focus_height: f32,
    /// Turntable angle applied to the character rigs, in `[0, 360)`.
    pub idle_spin_deg: f32,
    /// Driving mode.
    pub mode: CameraMode,
}

impl CameraState {
    fn from_pose(pose: CameraPose) -> Self {
        Self {
            pitch_deg: pose.pitch_deg,
            yaw_deg: pose.yaw_deg,
            distance: pose.distance,
            focus_height: pose.focus_height,
            idle_spin_deg: 0.0,
            mode: CameraMode::Preset,
        }
    }

    /// The orbit part of the state as a pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(
            self.pitch_deg,
            self.yaw_deg,
            self.distance,
            self.focus_height,
        )
    }
}

/// Orbit camera with presets, view-mode filtering, and smooth blends.
#[derive(Debug, Clone)]
pub struct CameraRig {
    state: CameraState,
    transition: CameraTransition,
    presets: PresetTable,
    view_mode: ViewMode,
    /// Absolute preset indices offered by `view_mode`.
    subset: Vec<usize>,
    /// Position within `subset`.
    preset_index: usize,
    idle_spin: bool,
    options: CameraOptions,
}

impl CameraRig {
    /// Place the camera at the configured home pose in preset mode.
    ///
    /// Options are [validated](CameraOptions::validated) first.
    #[must_use]
    pub fn new(
        presets: PresetTable,
        view_mode: ViewMode,
        options: CameraOptions,
    ) -> Self {
        let options = options.validated();
        let subset = presets.subset(view_mode);
        let mut rig = Self {
            state: CameraState::from_pose(options.home),
            transition: CameraTransition::new(
                options.transition_secs,
                options.easing,
            ),
            presets,
            view_mode,
            subset,
            preset_index: 0,
            idle_spin: options.idle_spin_on_start,
            options,
        };
        rig.apply(rig.options.home);
        rig
    }

    /// Current orbit state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Current orbit pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.state.pose()
    }

    /// Driving mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.state.mode
    }

    /// Active view mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Position within the current view mode's preset subset.
    #[must_use]
    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    /// Number of presets offered by the current view mode.
    #[must_use]
    pub fn subset_len(&self) -> usize {
        self.subset.len()
    }

    /// Preset at the current index, if the subset is non-empty.
    #[must_use]
    pub fn active_preset(&self) -> Option<&CameraPreset> {
        self.subset
            .get(self.preset_index)
            .and_then(|&i| self.presets.get(i))
    }

    /// Full preset table.
    #[must_use]
    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    /// Blend controller.
    #[must_use]
    pub fn transition(&self) -> &CameraTransition {
        &self.transition
    }

    /// Whether the idle turntable is running.
    #[must_use]
    pub fn idle_spin_enabled(&self) -> bool {
        self.idle_spin
    }

    /// Orbit by a pointer delta in pixels. Switches to free mode, snapping
    /// any running blend to where it currently is.
    pub fn rotate(&mut self, delta: Vec2) {
        self.snap_transition();
        self.state.mode = CameraMode::Free;
        self.state.yaw_deg += delta.x * self.options.rotate_speed;
        self.state.pitch_deg = (self.state.pitch_deg
            + delta.y * self.options.rotate_speed)
            .clamp(-self.options.pitch_limit, self.options.pitch_limit);
    }

    /// Zoom by scroll units; positive moves closer. Distance never drops
    /// below the configured minimum.
    pub fn zoom(&mut self, delta: f32) {
        self.snap_transition();
        self.state.distance *= 1.0 - delta * self.options.zoom_speed;
        self.state.distance = self.state.distance.max(self.options.min_distance);
    }

    /// Move `step` presets through the current subset (wrapping) and blend
    /// to the result.
    ///
    /// Fails with [`DioramaError::State`] when the view mode offers no
    /// presets; the camera is left as it was.
    pub fn cycle_preset(&mut self, step: isize) -> Result<(), DioramaError> {
        let len = self.subset.len();
        if len == 0 {
            return Err(DioramaError::State(format!(
                "no camera presets for {:?} view",
                self.view_mode
            )));
        }
        let len = len as isize;
        self.preset_index =
            (self.preset_index as isize + step).rem_euclid(len) as usize;
        self.blend_to_active();
        Ok(())
    }

    /// Blend to the next preset.
    pub fn next_preset(&mut self) -> Result<(), DioramaError> {
        self.cycle_preset(1)
    }

    /// Blend to the previous preset.
    pub fn previous_preset(&mut self) -> Result<(), DioramaError> {
        self.cycle_preset(-1)
    }

    /// Flip between free and preset mode without moving the camera.
    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
    }

    /// Blend back to the home pose.
    pub fn reset(&mut self) {
        self.state.mode = CameraMode::Preset;
        let home = self.options.home;
        self.begin_blend(home);
    }

    /// Switch view mode and blend to the first preset it offers. With no
    /// presets on offer the camera stays where it is.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.subset = self.presets.subset(mode);
        self.preset_index = 0;
        if self.subset.is_empty() {
            log::debug!("{mode:?} view offers no presets");
            return;
        }
        self.blend_to_active();
    }

    /// Advance to the next view mode.
    pub fn cycle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.next());
    }

    /// Start or stop the idle turntable.
    pub fn toggle_idle_spin(&mut self) {
        self.idle_spin = !self.idle_spin;
    }

    /// Advance the blend and the turntable by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        if let Some(pose) = self.transition.tick(dt) {
            self.apply(pose);
        }
        if self.idle_spin {
            self.state.idle_spin_deg = (self.state.idle_spin_deg
                + self.options.idle_spin_deg_per_sec * dt)
                .rem_euclid(360.0);
        }
    }

    fn blend_to_active(&mut self) {
        let Some(target) = self.active_preset().map(CameraPreset::pose) else {
            return;
        };
        self.state.mode = CameraMode::Preset;
        log::debug!(
            "camera preset {}/{}",
            self.preset_index + 1,
            self.subset.len()
        );
        self.begin_blend(target);
    }

    fn begin_blend(&mut self, target: CameraPose) {
        let target = CameraPose {
            distance: target.distance.max(self.options.min_distance),
            ..target
        };
        self.transition.begin(self.state.pose(), target);
    }

    fn snap_transition(&mut self) {
        if let Some(pose) = self.transition.cancel() {
            self.apply(pose);
        }
    }

    fn apply(&mut self, pose: CameraPose) {
        self.state.pitch_deg = pose
            .pitch_deg
            .clamp(-self.options.pitch_limit, self.options.pitch_limit);
        self.state.yaw_deg = pose.yaw_deg;
        self.state.distance = pose.distance.max(self.options.min_distance);
        self.state.focus_height = pose.focus_height;
    }
}
