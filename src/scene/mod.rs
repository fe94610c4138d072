//! Authoritative scene: character rigs and their parts.
//!
//! Every part is a [`SceneObject`] owned by exactly one [`CharacterRig`].
//! Behavior tags (motion profile, glow category) are resolved once by
//! [`Scene::bind_behaviors`] after loading, never by name per frame.

/// Emissive part categories and the glow pulse.
pub mod glow;
/// Named rigid parts and model-matrix composition.
pub mod object;
/// Character placement and base transforms.
pub mod rig;

pub use glow::{emissive_tint, pulse_intensity, GlowCategory};
pub use object::SceneObject;
pub use rig::{CharacterRig, RigConfig};

use crate::animation::{MotionTable, ProceduralAnimator};
use crate::camera::{FocusTag, ViewMode};
use crate::options::{AnimationOptions, GlowOptions};

/// Outcome of binding behavior tags to every part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Parts with a motion profile.
    pub animated: usize,
    /// Parts whose motion entry was rejected.
    pub failed: usize,
    /// Parts in the emissive pass.
    pub emissive: usize,
}

/// Characters in draw order.
#[derive(Debug, Default)]
pub struct Scene {
    rigs: Vec<CharacterRig>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character rig.
    pub fn add_rig(&mut self, rig: CharacterRig) {
        log::debug!(
            "scene: added rig '{}' with {} parts",
            rig.config.name,
            rig.objects.len()
        );
        self.rigs.push(rig);
    }

    /// All rigs in insertion order.
    #[must_use]
    pub fn rigs(&self) -> &[CharacterRig] {
        &self.rigs
    }

    /// Mutable access to all rigs.
    pub fn rigs_mut(&mut self) -> &mut [CharacterRig] {
        &mut self.rigs
    }

    /// Every part of every rig.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.rigs.iter().flat_map(|r| r.objects.iter())
    }

    /// Total number of parts.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.rigs.iter().map(|r| r.objects.len()).sum()
    }

    /// First part named `name` (case-insensitive).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects().find(|o| o.name().eq_ignore_ascii_case(name))
    }

    /// Resolve motion profiles and glow categories for every part.
    ///
    /// A rejected motion entry is logged and leaves that part static; the
    /// rest of the scene is unaffected.
    pub fn bind_behaviors(
        &mut self,
        table: &MotionTable,
        animation: &AnimationOptions,
        glow: &GlowOptions,
    ) -> BindReport {
        let mut report = BindReport::default();
        for object in self.rigs.iter_mut().flat_map(|r| r.objects.iter_mut()) {
            match object.bind_motion(table, &animation.markers) {
                Ok(()) if object.motion().is_some() => report.animated += 1,
                Ok(()) => {}
                Err(e) => {
                    log::warn!("{e}; part stays static");
                    report.failed += 1;
                }
            }
            object.set_glow(GlowCategory::classify(object.name(), glow));
            if object.is_emissive() {
                report.emissive += 1;
            }
        }
        log::info!(
            "scene: {} parts, {} animated, {} emissive, {} failed",
            self.object_count(),
            report.animated,
            report.emissive,
            report.failed
        );
        report
    }

    /// Advance every part's animation.
    pub fn advance(
        &mut self,
        animator: &ProceduralAnimator,
        dt: f32,
        total_time: f64,
    ) {
        for object in self.rigs.iter_mut().flat_map(|r| r.objects.iter_mut()) {
            object.advance(animator, dt, total_time);
        }
    }

    /// X coordinate the camera looks at in `mode`.
    ///
    /// Single-character modes aim at that character's rig; the versus mode,
    /// or a mode whose character is absent, aims at the mean of all rigs.
    #[must_use]
    pub fn focus_x(&self, mode: ViewMode) -> f32 {
        let focus = mode.focus();
        if focus != FocusTag::Both {
            if let Some(rig) = self.rigs.iter().find(|r| r.config.focus == focus)
            {
                return rig.center_x();
            }
        }
        if self.rigs.is_empty() {
            return 0.0;
        }
        self.rigs.iter().map(CharacterRig::center_x).sum::<f32>()
            / self.rigs.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::animation::{MotionEntry, MotionKind};
    use crate::options::LayoutOptions;
    use crate::render::{Geometry, GeometryHandle, TextureSet};

    fn part(name: &str, id: u32) -> SceneObject {
        SceneObject::new(
            name,
            Geometry::new(GeometryHandle(id), 12),
            Arc::new(TextureSet::new()),
        )
    }

    fn versus_scene() -> Scene {
        let mut scene = Scene::new();
        let layout = LayoutOptions::versus();
        scene.add_rig(CharacterRig::new(
            layout.rigs[0].clone(),
            vec![part("helmet", 1), part("eye_left", 2), part("rose_1", 3)],
        ));
        scene.add_rig(CharacterRig::new(
            layout.rigs[1].clone(),
            vec![part("horns", 4), part("scythe", 5)],
        ));
        scene
    }

    #[test]
    fn bind_behaviors_tags_parts() {
        let mut scene = versus_scene();
        let mut table = MotionTable::new();
        let mut entry = MotionEntry::default();
        for (k, v) in [("bob_amplitude", 0.02), ("bob_frequency", 1.0), ("bob_phase", 0.0)]
        {
            let _ = entry.params.insert(k.to_owned(), v);
        }
        table.insert("rose_1", entry);
        table.insert("horns", MotionEntry {
            profile: Some("drape".into()),
            ..MotionEntry::default()
        });

        let report = scene.bind_behaviors(
            &table,
            &AnimationOptions::default(),
            &GlowOptions::default(),
        );
        assert_eq!(report.animated, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.emissive, 2);

        let rose = scene.find("ROSE_1").unwrap();
        assert_eq!(rose.motion().map(|m| m.kind()), Some(MotionKind::Bob));
        assert_eq!(scene.find("scythe").unwrap().glow(), GlowCategory::Weapon);
        assert!(scene.find("horns").unwrap().motion().is_none());
    }

    #[test]
    fn focus_x_per_view_mode() {
        let scene = versus_scene();
        assert_eq!(scene.focus_x(ViewMode::Knight), -1.5);
        assert_eq!(scene.focus_x(ViewMode::Demon), 1.5);
        assert_eq!(scene.focus_x(ViewMode::Versus), 0.0);
    }

    #[test]
    fn missing_character_falls_back_to_mean() {
        let mut scene = Scene::new();
        scene.add_rig(CharacterRig::new(
            RigConfig {
                offset: [2.0, 0.0, 0.0],
                ..RigConfig::default()
            },
            vec![part("helmet", 1)],
        ));
        assert_eq!(scene.focus_x(ViewMode::Demon), 2.0);
        assert_eq!(Scene::new().focus_x(ViewMode::Versus), 0.0);
        assert_eq!(scene.object_count(), 1);
    }
}
