use glam::{Mat4, Vec3};

use super::texture::TextureSlot;

/// Uniform holding the per-object model matrix.
pub const MODEL_UNIFORM: &str = "model";
/// Uniform holding the camera view matrix.
pub const VIEW_UNIFORM: &str = "view";
/// Uniform holding the projection matrix.
pub const PROJECTION_UNIFORM: &str = "projection";
/// Uniform holding the additive emissive tint.
pub const EMISSIVE_TINT_UNIFORM: &str = "emissive_tint";

/// Opaque handle to an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Opaque handle to uploaded vertex/index buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u32);

/// What fills the frame behind the characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundMode {
    /// Plain clear color (RGBA).
    Color([f32; 4]),
    /// Full-screen textured quad drawn before the scene, depth test off.
    Texture(TextureHandle),
}

/// Static indexed triangle-list geometry owned by one scene object.
#[derive(Debug, PartialEq, Eq)]
pub struct Geometry {
    handle: GeometryHandle,
    index_count: u32,
}

impl Geometry {
    /// Wrap an uploaded mesh.
    #[must_use]
    pub fn new(handle: GeometryHandle, index_count: u32) -> Self {
        Self {
            handle,
            index_count,
        }
    }

    /// Backend handle.
    #[must_use]
    pub fn handle(&self) -> GeometryHandle {
        self.handle
    }

    /// Number of indices to draw.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// The drawing surface the scene is submitted to.
///
/// Implementations own every GPU resource; the scene only refers to them
/// through handles. Calls arrive in submission order and backends must not
/// expect any state (bound textures, uniforms) to be restored between
/// objects.
pub trait RenderBackend {
    /// Start a frame, clearing color and depth.
    fn begin_frame(&mut self, _clear_color: [f32; 4]) {}

    /// Cover the viewport with `texture` as a full-screen quad, without
    /// writing depth. Called after [`begin_frame`](Self::begin_frame) and
    /// before any scene draw.
    fn draw_background(&mut self, texture: TextureHandle);

    /// Bind `texture` to the unit of `slot`.
    fn bind_texture(&mut self, slot: TextureSlot, texture: TextureHandle);

    /// Upload a 4×4 matrix uniform.
    fn set_uniform_matrix(&mut self, name: &str, value: &Mat4);

    /// Upload a vec3 uniform.
    fn set_uniform_vec3(&mut self, name: &str, value: Vec3);

    /// Draw `index_count` indices of `geometry` as a triangle list.
    fn draw_indexed(&mut self, geometry: GeometryHandle, index_count: u32);
}
