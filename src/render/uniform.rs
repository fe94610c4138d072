use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame uniform block for backends that upload structured buffers.
pub struct FrameUniform {
    /// Camera view matrix.
    pub view: [[f32; 4]; 4],
    /// Perspective projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Global glow intensity this frame.
    pub glow: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-object uniform block.
pub struct ObjectUniform {
    /// Composed model matrix.
    pub model: [[f32; 4]; 4],
    /// Additive emissive tint.
    pub emissive_tint: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            glow: 0.0,
        }
    }
}

impl FrameUniform {
    /// Fill from the resolved frame matrices.
    #[must_use]
    pub fn new(view: &Mat4, projection: &Mat4, eye: Vec3, glow: f32) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            eye: eye.to_array(),
            glow,
        }
    }
}

impl ObjectUniform {
    /// Fill from a composed model matrix and tint.
    #[must_use]
    pub fn new(model: &Mat4, emissive_tint: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            emissive_tint: emissive_tint.to_array(),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_16_byte_aligned() {
        assert_eq!(size_of::<FrameUniform>() % 16, 0);
        assert_eq!(size_of::<ObjectUniform>() % 16, 0);
    }

    #[test]
    fn object_uniform_casts_to_bytes() {
        let u = ObjectUniform::new(&Mat4::IDENTITY, Vec3::new(1.0, 0.5, 0.0));
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 80);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[0], 1.0);
        assert_eq!(&floats[16..19], &[1.0, 0.5, 0.0]);
    }
}
