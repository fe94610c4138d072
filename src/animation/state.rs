//! Per-object mutable animation state.

use glam::Vec3;
use rustc_hash::FxHashMap;

/// Offset / rotation / scale triple produced by a motion profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Translation applied before rotation and scale.
    pub offset: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Per-axis scale factors.
    pub scale: Vec3,
}

impl Pose {
    /// No offset, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        offset: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Animation state carried by every scene object and rewritten each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Seconds this object has been advanced for (never negative).
    pub elapsed: f32,
    /// Current translation offset.
    pub offset: Vec3,
    /// Current Euler rotation in radians.
    pub rotation: Vec3,
    /// Current per-axis scale.
    pub scale: Vec3,
    /// Raw numeric parameters from the motion table entry, if any.
    pub custom: FxHashMap<String, f32>,
}

impl AnimationState {
    /// Fresh state at rest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            custom: FxHashMap::default(),
        }
    }

    /// Current offset / rotation / scale as a [`Pose`].
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            offset: self.offset,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Overwrite offset / rotation / scale from a [`Pose`].
    pub fn set_pose(&mut self, pose: Pose) {
        self.offset = pose.offset;
        self.rotation = pose.rotation;
        self.scale = pose.scale;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
