//! Rendering seam between the scene core and a drawing backend.
//!
//! The core never touches GPU resources directly. It talks to a
//! [`RenderBackend`] through opaque handles, uniform names, and indexed
//! draws; uploading meshes and textures and compiling shaders are the
//! backend's business.

/// Backend trait, resource handles, and uniform names.
pub mod backend;
/// Semantic texture slots and per-object texture sets.
pub mod texture;
/// Logging backend used by the standalone viewer.
pub mod trace;
/// `bytemuck` uniform blocks.
pub mod uniform;

pub use backend::{
    BackgroundMode, Geometry, GeometryHandle, RenderBackend, TextureHandle,
    EMISSIVE_TINT_UNIFORM, MODEL_UNIFORM, PROJECTION_UNIFORM, VIEW_UNIFORM,
};
pub use texture::{TextureSet, TextureSlot};
pub use trace::TraceBackend;
pub use uniform::{FrameUniform, ObjectUniform};

#[cfg(test)]
pub(crate) mod recording {
    use glam::{Mat4, Vec3};

    use super::{GeometryHandle, RenderBackend, TextureHandle, TextureSlot};

    /// One recorded backend call.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Begin,
        Background(TextureHandle),
        Bind(TextureSlot, TextureHandle),
        Matrix(String, Mat4),
        Vec3(String, Vec3),
        Draw(GeometryHandle, u32),
    }

    /// Backend that records every call for assertions.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingBackend {
        pub(crate) calls: Vec<Call>,
    }

    impl RecordingBackend {
        pub(crate) fn draws(&self) -> Vec<GeometryHandle> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Draw(g, _) => Some(*g),
                    _ => None,
                })
                .collect()
        }
    }

    impl RenderBackend for RecordingBackend {
        fn begin_frame(&mut self, _clear_color: [f32; 4]) {
            self.calls.push(Call::Begin);
        }

        fn draw_background(&mut self, texture: TextureHandle) {
            self.calls.push(Call::Background(texture));
        }

        fn bind_texture(&mut self, slot: TextureSlot, texture: TextureHandle) {
            self.calls.push(Call::Bind(slot, texture));
        }

        fn set_uniform_matrix(&mut self, name: &str, value: &Mat4) {
            self.calls.push(Call::Matrix(name.to_owned(), *value));
        }

        fn set_uniform_vec3(&mut self, name: &str, value: Vec3) {
            self.calls.push(Call::Vec3(name.to_owned(), value));
        }

        fn draw_indexed(&mut self, geometry: GeometryHandle, index_count: u32) {
            self.calls.push(Call::Draw(geometry, index_count));
        }
    }
}
