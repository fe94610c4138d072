//! Character rigs: groups of parts sharing one base transform.

use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::object::SceneObject;
use crate::camera::FocusTag;

/// Placement of one character in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct RigConfig {
    /// Display name.
    pub name: String,
    /// Which view mode frames this rig.
    pub focus: FocusTag,
    /// World-space position of the rig origin.
    pub offset: [f32; 3],
    /// Base facing in degrees around the vertical axis.
    pub facing_deg: f32,
    /// Spin against the idle turntable instead of with it.
    pub mirror_spin: bool,
    /// Uniform scale of the whole character.
    pub scale: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            name: "knight".into(),
            focus: FocusTag::Knight,
            offset: [0.0; 3],
            facing_deg: 0.0,
            mirror_spin: false,
            scale: 1.0,
        }
    }
}

impl RigConfig {
    /// Character → world transform with the idle turntable at
    /// `idle_spin_deg`.
    #[must_use]
    pub fn base_transform(&self, idle_spin_deg: f32) -> Mat4 {
        let spin = if self.mirror_spin {
            -idle_spin_deg
        } else {
            idle_spin_deg
        };
        Mat4::from_translation(Vec3::from(self.offset))
            * Mat4::from_rotation_y((self.facing_deg + spin).to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// A placed character and its parts.
#[derive(Debug)]
pub struct CharacterRig {
    /// Placement.
    pub config: RigConfig,
    /// Parts, in load order.
    pub objects: Vec<SceneObject>,
}

impl CharacterRig {
    /// Create a rig from its placement and parts.
    #[must_use]
    pub fn new(config: RigConfig, objects: Vec<SceneObject>) -> Self {
        Self { config, objects }
    }

    /// X coordinate of the rig origin, used to aim the camera.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.config.offset[0]
    }
}
