use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::MotionKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Procedural motion settings.
pub struct AnimationOptions {
    /// Whether procedural motion runs at all.
    #[schemars(title = "Animate")]
    pub enabled: bool,
    /// Name marker → motion profile. Longest marker wins; ties go to the
    /// earlier entry.
    #[schemars(skip)]
    pub markers: Vec<(String, MotionKind)>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            markers: vec![
                ("rose".into(), MotionKind::Bob),
                ("cloak".into(), MotionKind::Drape),
            ],
        }
    }
}
