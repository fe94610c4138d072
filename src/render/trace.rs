use glam::{Mat4, Vec3};

use super::backend::{GeometryHandle, RenderBackend, TextureHandle};
use super::texture::TextureSlot;

/// Backend that records submission statistics and logs every call at
/// `trace` level. Used by the standalone viewer when no GPU backend is
/// plugged in.
#[derive(Debug, Default)]
pub struct TraceBackend {
    frames: u64,
    draws_this_frame: u32,
    indices_this_frame: u64,
    texture_binds_this_frame: u32,
}

impl TraceBackend {
    /// Create an idle backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames started so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls issued in the current frame.
    #[must_use]
    pub fn draws_this_frame(&self) -> u32 {
        self.draws_this_frame
    }

    /// Indices submitted in the current frame.
    #[must_use]
    pub fn indices_this_frame(&self) -> u64 {
        self.indices_this_frame
    }
}

impl RenderBackend for TraceBackend {
    fn begin_frame(&mut self, clear_color: [f32; 4]) {
        if self.frames > 0 {
            log::trace!(
                "frame {}: {} draws, {} indices, {} texture binds",
                self.frames,
                self.draws_this_frame,
                self.indices_this_frame,
                self.texture_binds_this_frame
            );
        }
        self.frames += 1;
        self.draws_this_frame = 0;
        self.indices_this_frame = 0;
        self.texture_binds_this_frame = 0;
        log::trace!("clear {clear_color:?}");
    }

    fn draw_background(&mut self, texture: TextureHandle) {
        self.texture_binds_this_frame += 1;
        log::trace!("background quad <- {texture:?}");
    }

    fn bind_texture(&mut self, slot: TextureSlot, texture: TextureHandle) {
        self.texture_binds_this_frame += 1;
        log::trace!("bind {slot} (unit {}) <- {texture:?}", slot.unit());
    }

    fn set_uniform_matrix(&mut self, name: &str, value: &Mat4) {
        log::trace!("uniform {name} = {:?}", value.w_axis);
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) {
        log::trace!("uniform {name} = {value}");
    }

    fn draw_indexed(&mut self, geometry: GeometryHandle, index_count: u32) {
        self.draws_this_frame += 1;
        self.indices_this_frame += u64::from(index_count);
        log::trace!("draw {geometry:?} ({index_count} indices)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_reset_per_frame() {
        let mut backend = TraceBackend::new();
        backend.begin_frame([0.0; 4]);
        backend.draw_indexed(GeometryHandle(1), 36);
        backend.draw_indexed(GeometryHandle(2), 12);
        assert_eq!(backend.draws_this_frame(), 2);
        assert_eq!(backend.indices_this_frame(), 48);

        backend.begin_frame([0.0; 4]);
        assert_eq!(backend.frames(), 2);
        assert_eq!(backend.draws_this_frame(), 0);
    }
}
