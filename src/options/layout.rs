use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::FocusTag;
use crate::scene::RigConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// How many characters the scene holds and where they stand.
pub struct LayoutOptions {
    /// One entry per character rig.
    #[schemars(skip)]
    pub rigs: Vec<RigConfig>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::single()
    }
}

impl LayoutOptions {
    /// The knight alone, centered.
    #[must_use]
    pub fn single() -> Self {
        Self {
            rigs: vec![RigConfig::default()],
        }
    }

    /// Knight on the left, demon on the right, turned toward each other
    /// and spinning in mirror.
    #[must_use]
    pub fn versus() -> Self {
        Self {
            rigs: vec![
                RigConfig {
                    name: "knight".into(),
                    focus: FocusTag::Knight,
                    offset: [-1.5, 0.0, 0.0],
                    facing_deg: 20.0,
                    mirror_spin: false,
                    scale: 1.0,
                },
                RigConfig {
                    name: "demon".into(),
                    focus: FocusTag::Demon,
                    offset: [1.5, 0.0, 0.0],
                    facing_deg: -20.0,
                    mirror_spin: true,
                    scale: 1.0,
                },
            ],
        }
    }
}
