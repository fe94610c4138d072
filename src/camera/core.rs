use glam::{Mat4, Vec3};

use super::preset::CameraPose;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Place an orbit camera for `pose`, looking at `(target_x,
    /// pose.focus_height, 0)` with a fixed `+Y` up vector.
    ///
    /// Yaw 0 / pitch 0 puts the eye on the `+Z` axis; positive pitch raises
    /// it above the focus point.
    #[must_use]
    pub fn orbit(
        pose: &CameraPose,
        target_x: f32,
        aspect: f32,
        fovy: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let target = Vec3::new(target_x, pose.focus_height, 0.0);
        Self {
            eye: target + orbit_direction(pose) * pose.distance,
            target,
            up: Vec3::Y,
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Right-handed look-at view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Unit vector from the focus point toward the eye.
#[must_use]
pub fn orbit_direction(pose: &CameraPose) -> Vec3 {
    let pitch = pose.pitch_deg.to_radians();
    let yaw = pose.yaw_deg.to_radians();
    Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_looks_down_negative_z() {
        let cam = Camera::orbit(&CameraPose::DEFAULT, 0.0, 1.0, 40.0, 0.1, 100.0);
        assert!(cam.eye.abs_diff_eq(Vec3::new(0.0, 1.0, 6.0), 1e-6));
        assert_eq!(cam.target, Vec3::new(0.0, 1.0, 0.0));
        // The focus point sits straight ahead on the view axis.
        let in_view = cam.view_matrix().transform_point3(cam.target);
        assert!(in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -6.0), 1e-5));
    }

    #[test]
    fn pitch_raises_eye() {
        let pose = CameraPose::new(30.0, 0.0, 4.0, 1.0);
        let cam = Camera::orbit(&pose, 0.0, 1.0, 40.0, 0.1, 100.0);
        assert!((cam.eye.y - (1.0 + 2.0)).abs() < 1e-5);
        assert!((cam.eye.distance(cam.target) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn target_x_shifts_look_at() {
        let cam = Camera::orbit(&CameraPose::DEFAULT, -1.5, 1.0, 40.0, 0.1, 100.0);
        assert_eq!(cam.target.x, -1.5);
        assert!((cam.eye.x + 1.5).abs() < 1e-6);
    }
}
