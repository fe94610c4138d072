//! Read-only query methods for [`SceneComposer`].

use super::SceneComposer;
use crate::animation::ProceduralAnimator;
use crate::camera::{Camera, CameraRig};
use crate::options::Options;
use crate::render::BackgroundMode;
use crate::scene::Scene;

// ── Camera ──

impl SceneComposer {
    /// Camera for the current orbit pose, aimed at the focused rig.
    #[must_use]
    pub fn camera(&self) -> Camera {
        let opts = &self.options.camera;
        Camera::orbit(
            &self.camera.pose(),
            self.scene.focus_x(self.camera.view_mode()),
            self.aspect,
            opts.fovy,
            opts.znear,
            opts.zfar,
        )
    }

    /// The orbit state machine.
    #[must_use]
    pub fn camera_rig(&self) -> &CameraRig {
        &self.camera
    }
}

// ── Scene ──

impl SceneComposer {
    /// The scene being composed.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access, e.g. to rebind behaviors.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The procedural animator.
    #[must_use]
    pub fn animator(&self) -> &ProceduralAnimator {
        &self.animator
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// What fills the frame behind the characters.
    #[must_use]
    pub fn background(&self) -> BackgroundMode {
        self.background
    }
}

// ── Lifecycle ──

impl SceneComposer {
    /// Scene clock in seconds.
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Frames updated so far.
    #[must_use]
    pub fn glow_ticks(&self) -> u64 {
        self.glow_ticks
    }

    /// Whether a quit command has been executed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
