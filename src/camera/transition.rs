//! Timed blending between two camera poses.

use super::preset::CameraPose;
use crate::util::easing::{lerp, EasingFunction};

/// Default blend duration in seconds.
pub const DEFAULT_TRANSITION_SECS: f32 = 0.5;

/// Interpolate every pose field independently at eased progress `t`.
///
/// `t` is expected to be already eased; `t >= 1` returns `target` exactly.
#[must_use]
pub fn interpolate(start: &CameraPose, target: &CameraPose, t: f32) -> CameraPose {
    if t >= 1.0 {
        return *target;
    }
    CameraPose {
        pitch_deg: lerp(start.pitch_deg, target.pitch_deg, t),
        yaw_deg: lerp(start.yaw_deg, target.yaw_deg, t),
        distance: lerp(start.distance, target.distance, t),
        focus_height: lerp(start.focus_height, target.focus_height, t),
    }
}

/// Blend state machine: idle, or carrying the camera from a start snapshot
/// to a target snapshot over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    active: bool,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
    start: CameraPose,
    target: CameraPose,
}

impl CameraTransition {
    /// An idle controller that will blend over `duration` seconds.
    #[must_use]
    pub fn new(duration: f32, easing: EasingFunction) -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
            start: CameraPose::DEFAULT,
            target: CameraPose::DEFAULT,
        }
    }

    /// Whether a blend is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Blend duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Seconds elapsed in the current blend.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Snapshot the blend started from.
    #[must_use]
    pub fn start_pose(&self) -> CameraPose {
        self.start
    }

    /// Snapshot the blend is heading to.
    #[must_use]
    pub fn target_pose(&self) -> CameraPose {
        self.target
    }

    /// Raw progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Interpolated pose, or `None` when idle.
    #[must_use]
    pub fn current(&self) -> Option<CameraPose> {
        self.active.then(|| {
            interpolate(
                &self.start,
                &self.target,
                self.easing.evaluate(self.progress()),
            )
        })
    }

    /// Begin blending toward `target`.
    ///
    /// `from` is the camera's resting pose. If a blend is already running,
    /// its current interpolated pose is used instead so the camera never
    /// jumps.
    pub fn begin(&mut self, from: CameraPose, target: CameraPose) {
        self.start = self.current().unwrap_or(from);
        self.target = target;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Advance by `dt` seconds and return the pose to apply, if any.
    ///
    /// The blend deactivates on the tick that reaches the target.
    pub fn tick(&mut self, dt: f32) -> Option<CameraPose> {
        if !self.active {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let t = self.progress();
        let pose = interpolate(&self.start, &self.target, self.easing.evaluate(t));
        if t >= 1.0 {
            self.active = false;
        }
        Some(pose)
    }

    /// Stop blending and return where the camera currently is.
    pub fn cancel(&mut self) -> Option<CameraPose> {
        let pose = self.current();
        self.active = false;
        pose
    }
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_SECS, EasingFunction::SmoothStep)
    }
}
