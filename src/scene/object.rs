use std::sync::Arc;

use glam::{Mat4, Vec3};

use super::glow::GlowCategory;
use crate::animation::{
    AnimationState, MotionMarkers, MotionProfile, MotionTable,
    ProceduralAnimator,
};
use crate::error::DioramaError;
use crate::render::{
    Geometry, RenderBackend, TextureSet, EMISSIVE_TINT_UNIFORM, MODEL_UNIFORM,
};

/// A named rigid part of a character.
#[derive(Debug)]
pub struct SceneObject {
    name: String,
    geometry: Geometry,
    textures: Arc<TextureSet>,
    motion: Option<MotionProfile>,
    glow: GlowCategory,
    /// Mutable per-frame animation state.
    pub animation: AnimationState,
}

impl SceneObject {
    /// Wrap uploaded geometry and textures. The object starts at rest with
    /// no motion profile and no glow.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        geometry: Geometry,
        textures: Arc<TextureSet>,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            textures,
            motion: None,
            glow: GlowCategory::None,
            animation: AnimationState::new(),
        }
    }

    /// Part name as exported.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned static geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Shared texture set.
    #[must_use]
    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }

    /// Bound motion profile, if any.
    #[must_use]
    pub fn motion(&self) -> Option<&MotionProfile> {
        self.motion.as_ref()
    }

    /// Glow category resolved at load.
    #[must_use]
    pub fn glow(&self) -> GlowCategory {
        self.glow
    }

    /// Whether this part is drawn in the deferred emissive pass.
    #[must_use]
    pub fn is_emissive(&self) -> bool {
        self.glow.is_emissive()
    }

    /// Set the glow category.
    pub fn set_glow(&mut self, glow: GlowCategory) {
        self.glow = glow;
    }

    /// Attach a motion profile directly.
    pub fn set_motion(&mut self, motion: Option<MotionProfile>) {
        self.motion = motion;
    }

    /// Resolve and bind this object's motion profile from `table`.
    ///
    /// On error the object is left without custom motion.
    pub fn bind_motion(
        &mut self,
        table: &MotionTable,
        markers: &MotionMarkers,
    ) -> Result<(), DioramaError> {
        self.motion = None;
        self.animation.custom.clear();
        let motion = table.bind(&self.name, markers)?;
        if motion.is_some() {
            if let Some(entry) = table.get(&self.name) {
                self.animation.custom.clone_from(&entry.params);
            }
        }
        self.motion = motion;
        Ok(())
    }

    /// Advance animation by `dt` with the scene clock at `total_time`.
    pub fn advance(
        &mut self,
        animator: &ProceduralAnimator,
        dt: f32,
        total_time: f64,
    ) {
        animator.advance(
            &mut self.animation,
            self.motion.as_ref(),
            dt,
            total_time,
        );
    }

    /// Compose the model matrix on top of `parent`.
    ///
    /// Order: translate by offset, rotate about X then Y then Z, scale.
    /// Rotation is skipped when all angles are exactly zero and scale is
    /// skipped when all factors are exactly one, so static parts carry no
    /// trigonometric rounding.
    #[must_use]
    pub fn compose_model_matrix(&self, parent: &Mat4) -> Mat4 {
        let state = &self.animation;
        let mut model = *parent * Mat4::from_translation(state.offset);

        if state.rotation != Vec3::ZERO {
            model = model
                * Mat4::from_rotation_x(state.rotation.x)
                * Mat4::from_rotation_y(state.rotation.y)
                * Mat4::from_rotation_z(state.rotation.z);
        }

        if state.scale != Vec3::ONE {
            model *= Mat4::from_scale(state.scale);
        }

        model
    }

    /// Bind textures, upload `model` and `tint`, and issue the draw.
    ///
    /// Leaves the backend with this object's textures and uniforms bound.
    pub fn draw(&self, backend: &mut dyn RenderBackend, model: &Mat4, tint: Vec3) {
        for (slot, texture) in self.textures.iter() {
            backend.bind_texture(slot, texture);
        }
        backend.set_uniform_matrix(MODEL_UNIFORM, model);
        backend.set_uniform_vec3(EMISSIVE_TINT_UNIFORM, tint);
        backend.draw_indexed(self.geometry.handle(), self.geometry.index_count());
    }
}
