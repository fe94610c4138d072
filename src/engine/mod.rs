//! Scene composer: owns the scene, the camera rig, and the animator, and
//! turns one frame's time delta into model, view, and tint data for a
//! [`RenderBackend`](crate::render::RenderBackend).

mod accessors;
/// The viewer's interactive vocabulary.
pub mod command;
mod draw;
/// Cooperative poll → update → draw → present loop.
pub mod frame_loop;

pub use command::ViewerCommand;
pub use draw::{DrawItem, DrawList};
pub use frame_loop::{FrameHost, FrameLoop};

use crate::animation::ProceduralAnimator;
use crate::camera::{CameraRig, PresetTable, ViewMode};
use crate::error::DioramaError;
use crate::options::Options;
use crate::render::BackgroundMode;
use crate::scene::Scene;

/// Per-frame driver for a loaded scene.
///
/// One composer covers both the single-character and the versus layout;
/// the difference lives entirely in the scene's rigs and the view mode.
///
/// ```ignore
/// composer.execute(ViewerCommand::NextPreset);
/// composer.update(dt);
/// composer.render(&mut backend);
/// ```
#[derive(Debug)]
pub struct SceneComposer {
    options: Options,
    scene: Scene,
    camera: CameraRig,
    animator: ProceduralAnimator,
    /// Scene-wide monotonic clock in seconds.
    clock: f64,
    /// Frames updated so far; drives the glow pulse.
    glow_ticks: u64,
    aspect: f32,
    background: BackgroundMode,
    quit_requested: bool,
}

impl SceneComposer {
    /// Build a composer over an already bound scene.
    ///
    /// A scene with characters on both sides opens in the versus view,
    /// otherwise in the knight view.
    #[must_use]
    pub fn new(options: Options, scene: Scene, presets: PresetTable) -> Self {
        let view_mode = initial_view_mode(&scene);
        let camera = CameraRig::new(presets, view_mode, options.camera.clone());
        let mut animator = ProceduralAnimator::new();
        animator.set_enabled(options.animation.enabled);
        let aspect = options.display.aspect();
        let background = BackgroundMode::Color(options.display.background_color);
        Self {
            options,
            scene,
            camera,
            animator,
            clock: 0.0,
            glow_ticks: 0,
            aspect,
            background,
            quit_requested: false,
        }
    }

    /// Replace what fills the frame behind the characters. A texture must
    /// already be uploaded to the backend that renders this composer.
    pub fn set_background(&mut self, background: BackgroundMode) {
        log::debug!("background: {background:?}");
        self.background = background;
    }

    /// Apply one viewer command.
    ///
    /// Commands that cannot apply in the current state are logged and
    /// ignored; the loop never stops because of them.
    pub fn execute(&mut self, cmd: ViewerCommand) {
        if let Err(e) = self.try_execute(cmd) {
            log::warn!("{cmd:?} ignored: {e}");
        }
    }

    fn try_execute(&mut self, cmd: ViewerCommand) -> Result<(), DioramaError> {
        match cmd {
            ViewerCommand::Quit => self.quit_requested = true,
            ViewerCommand::RotateCamera { delta } => self.camera.rotate(delta),
            ViewerCommand::Zoom { delta } => self.camera.zoom(delta),
            ViewerCommand::NextPreset => self.camera.next_preset()?,
            ViewerCommand::PreviousPreset => self.camera.previous_preset()?,
            ViewerCommand::ToggleCameraMode => self.camera.toggle_mode(),
            ViewerCommand::ResetCamera => self.camera.reset(),
            ViewerCommand::CycleViewMode => self.camera.cycle_view_mode(),
            ViewerCommand::SetViewMode(mode) => self.camera.set_view_mode(mode),
            ViewerCommand::ToggleIdleSpin => self.camera.toggle_idle_spin(),
            ViewerCommand::ToggleAnimation => {
                let enabled = !self.animator.is_enabled();
                self.animator.set_enabled(enabled);
                log::info!(
                    "procedural motion {}",
                    if enabled { "on" } else { "off" }
                );
            }
        }
        Ok(())
    }

    /// Advance the scene by `dt` seconds: clock and glow counter, every
    /// part's animation, then the camera.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.clock += f64::from(dt);
        self.glow_ticks = self.glow_ticks.wrapping_add(1);
        self.scene.advance(&self.animator, dt, self.clock);
        self.camera.update(dt);
    }

    /// Track a viewport size change.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

fn initial_view_mode(scene: &Scene) -> ViewMode {
    use crate::camera::FocusTag;

    let has = |tag: FocusTag| scene.rigs().iter().any(|r| r.config.focus == tag);
    if has(FocusTag::Knight) && has(FocusTag::Demon) {
        ViewMode::Versus
    } else if has(FocusTag::Demon) {
        ViewMode::Demon
    } else {
        ViewMode::Knight
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use glam::Vec2;

    use super::*;
    use crate::camera::CameraMode;
    use crate::options::LayoutOptions;
    use crate::render::{Geometry, GeometryHandle, TextureSet};
    use crate::scene::{CharacterRig, SceneObject};

    pub(crate) fn part(name: &str, id: u32) -> SceneObject {
        SceneObject::new(
            name,
            Geometry::new(GeometryHandle(id), 6),
            Arc::new(TextureSet::new()),
        )
    }

    pub(crate) fn knight_composer() -> SceneComposer {
        let options = Options::default();
        let mut scene = Scene::new();
        scene.add_rig(CharacterRig::new(
            options.layout.rigs[0].clone(),
            vec![part("gauntlet", 1), part("helmet", 2), part("eye_left", 3)],
        ));
        let _ = scene.bind_behaviors(
            &crate::animation::MotionTable::new(),
            &options.animation,
            &options.glow,
        );
        SceneComposer::new(options, scene, PresetTable::defaults())
    }

    pub(crate) fn versus_composer() -> SceneComposer {
        let layout = LayoutOptions::versus();
        let mut scene = Scene::new();
        scene.add_rig(CharacterRig::new(
            layout.rigs[0].clone(),
            vec![part("helmet", 1)],
        ));
        scene.add_rig(CharacterRig::new(
            layout.rigs[1].clone(),
            vec![part("horns", 2)],
        ));
        let options = Options {
            layout,
            ..Options::default()
        };
        SceneComposer::new(options, scene, PresetTable::defaults())
    }

    #[test]
    fn opens_in_view_matching_layout() {
        assert_eq!(knight_composer().camera_rig().view_mode(), ViewMode::Knight);
        assert_eq!(versus_composer().camera_rig().view_mode(), ViewMode::Versus);
    }

    #[test]
    fn update_advances_clock_and_ticks() {
        let mut c = knight_composer();
        c.update(0.5);
        c.update(-1.0);
        c.update(0.25);
        assert!((c.clock() - 0.75).abs() < 1e-6);
        assert_eq!(c.glow_ticks(), 3);
    }

    #[test]
    fn clock_keeps_rate_over_long_sessions() {
        let mut c = SceneComposer::new(
            Options::default(),
            Scene::new(),
            PresetTable::defaults(),
        );
        for _ in 0..60 * 3600 {
            c.update(1.0 / 60.0);
        }
        assert!((c.clock() - 3600.0).abs() < 1e-2);
    }

    #[test]
    fn bound_parts_follow_the_scene_clock() {
        let table = crate::animation::MotionTable::from_json_str(
            r#"{
                "rose_left": { "bob_amplitude": 0.03, "bob_frequency": 1.4, "bob_phase": 0.5 },
                "cloak": {
                    "primary_amplitude": 0.2, "primary_frequency": 1.1,
                    "secondary_amplitude": 0.1, "secondary_frequency": 0.7,
                    "flutter": 0.25
                }
            }"#,
        )
        .unwrap();
        let options = Options::default();
        let mut scene = Scene::new();
        scene.add_rig(CharacterRig::new(
            options.layout.rigs[0].clone(),
            vec![part("rose_left", 1), part("cloak", 2), part("helmet", 3)],
        ));
        let report =
            scene.bind_behaviors(&table, &options.animation, &options.glow);
        assert_eq!(report.animated, 2);

        let mut c = SceneComposer::new(options, scene, PresetTable::defaults());
        for _ in 0..7 {
            c.update(0.1);
        }
        for name in ["rose_left", "cloak"] {
            let obj = c.scene().find(name).unwrap();
            let expected = obj.motion().unwrap().evaluate(c.clock());
            assert_eq!(obj.animation.pose(), expected);
            assert_ne!(obj.animation.offset, glam::Vec3::ZERO);
        }
        let helmet = c.scene().find("helmet").unwrap();
        assert_eq!(helmet.animation.pose(), crate::animation::Pose::IDENTITY);
    }

    #[test]
    fn commands_drive_camera() {
        let mut c = knight_composer();
        c.execute(ViewerCommand::NextPreset);
        c.update(1.0);
        assert_eq!(c.camera_rig().state().distance, 3.5);

        c.execute(ViewerCommand::RotateCamera {
            delta: Vec2::new(10.0, 0.0),
        });
        assert_eq!(c.camera_rig().mode(), CameraMode::Free);

        c.execute(ViewerCommand::ResetCamera);
        c.update(0.25);
        assert_eq!(c.camera_rig().mode(), CameraMode::Preset);
        assert!(c.camera_rig().transition().is_active());
    }

    #[test]
    fn state_errors_do_not_stop_the_loop() {
        let presets = PresetTable::new(vec![crate::camera::CameraPreset::new(
            "Knight Only",
            crate::camera::CameraPose::DEFAULT,
        )
        .focused_on(crate::camera::FocusTag::Knight)]);
        let mut c = SceneComposer::new(Options::default(), Scene::new(), presets);
        c.execute(ViewerCommand::SetViewMode(ViewMode::Versus));
        c.execute(ViewerCommand::NextPreset);
        assert!(!c.quit_requested());
        c.execute(ViewerCommand::Quit);
        assert!(c.quit_requested());
    }

    #[test]
    fn toggle_animation_flips_animator() {
        let mut c = knight_composer();
        assert!(c.animator().is_enabled());
        c.execute(ViewerCommand::ToggleAnimation);
        assert!(!c.animator().is_enabled());
    }

    #[test]
    fn resize_ignores_zero_sizes() {
        let mut c = knight_composer();
        c.resize(800, 400);
        assert_eq!(c.camera().aspect, 2.0);
        c.resize(0, 400);
        assert_eq!(c.camera().aspect, 2.0);
    }
}
