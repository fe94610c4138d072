//! Per-frame draw preparation and submission.

use glam::{Mat4, Vec3};

use super::SceneComposer;
use crate::render::{
    BackgroundMode, FrameUniform, ObjectUniform, RenderBackend,
    PROJECTION_UNIFORM, VIEW_UNIFORM,
};
use crate::scene::{emissive_tint, pulse_intensity};

/// One part ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Index of the owning rig.
    pub rig: usize,
    /// Index of the part within its rig.
    pub object: usize,
    /// Composed object → world matrix.
    pub model: Mat4,
    /// Additive emissive tint (zero for non-emissive parts).
    pub tint: Vec3,
    /// Whether the part belongs to the deferred emissive pass.
    pub emissive: bool,
}

impl DrawItem {
    /// Uniform block for backends that upload structured buffers.
    #[must_use]
    pub fn uniform(&self) -> ObjectUniform {
        ObjectUniform::new(&self.model, self.tint)
    }
}

/// A frame's draws: every non-emissive part, then every emissive one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawItem>,
    emissive_start: usize,
}

impl DrawList {
    /// All draws in submission order.
    #[must_use]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Draws in the first pass.
    #[must_use]
    pub fn opaque(&self) -> &[DrawItem] {
        &self.items[..self.emissive_start]
    }

    /// Draws in the deferred emissive pass.
    #[must_use]
    pub fn emissive(&self) -> &[DrawItem] {
        &self.items[self.emissive_start..]
    }

    /// Number of draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SceneComposer {
    /// Glow intensity for the current frame.
    #[must_use]
    pub fn glow_intensity(&self) -> f32 {
        pulse_intensity(self.glow_ticks, &self.options.glow)
    }

    /// Compose every part's model matrix and tint for the current frame.
    #[must_use]
    pub fn prepare(&self) -> DrawList {
        let intensity = self.glow_intensity();
        let spin = self.camera.state().idle_spin_deg;

        let mut opaque = Vec::with_capacity(self.scene.object_count());
        let mut emissive = Vec::new();
        for (ri, rig) in self.scene.rigs().iter().enumerate() {
            let base = rig.config.base_transform(spin);
            for (oi, object) in rig.objects.iter().enumerate() {
                let item = DrawItem {
                    rig: ri,
                    object: oi,
                    model: object.compose_model_matrix(&base),
                    tint: emissive_tint(
                        object.glow(),
                        intensity,
                        &self.options.glow,
                    ),
                    emissive: object.is_emissive(),
                };
                if item.emissive {
                    emissive.push(item);
                } else {
                    opaque.push(item);
                }
            }
        }

        let emissive_start = opaque.len();
        opaque.append(&mut emissive);
        DrawList {
            items: opaque,
            emissive_start,
        }
    }

    /// Frame-wide uniform block.
    #[must_use]
    pub fn frame_uniform(&self) -> FrameUniform {
        let camera = self.camera();
        FrameUniform::new(
            &camera.view_matrix(),
            &camera.projection_matrix(),
            camera.eye,
            self.glow_intensity(),
        )
    }

    /// Submit the current frame to `backend` and return the draw count.
    ///
    /// A textured background is drawn right after the clear, before any
    /// part.
    pub fn render(&self, backend: &mut dyn RenderBackend) -> usize {
        let camera = self.camera();
        let list = self.prepare();

        match self.background {
            BackgroundMode::Color(color) => backend.begin_frame(color),
            BackgroundMode::Texture(texture) => {
                backend.begin_frame(self.options.display.background_color);
                backend.draw_background(texture);
            }
        }
        backend.set_uniform_matrix(VIEW_UNIFORM, &camera.view_matrix());
        backend.set_uniform_matrix(PROJECTION_UNIFORM, &camera.projection_matrix());

        let rigs = self.scene.rigs();
        for item in list.items() {
            if let Some(object) =
                rigs.get(item.rig).and_then(|r| r.objects.get(item.object))
            {
                object.draw(backend, &item.model, item.tint);
            }
        }
        list.len()
    }
}
