use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Glow", inline)]
#[serde(default)]
/// Emissive part selection and pulse parameters.
pub struct GlowOptions {
    /// Name markers tagging glowing eyes.
    #[schemars(skip)]
    pub eye_markers: Vec<String>,
    /// Name markers tagging glowing weapons.
    #[schemars(skip)]
    pub weapon_markers: Vec<String>,
    /// Eye glow color.
    #[schemars(skip)]
    pub eye_tint: [f32; 3],
    /// Weapon glow color.
    #[schemars(skip)]
    pub weapon_tint: [f32; 3],
    /// Mean pulse intensity.
    #[schemars(title = "Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub base_intensity: f32,
    /// Pulse swing around the mean.
    #[schemars(title = "Pulse", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub pulse_amplitude: f32,
    /// Pulse phase advance per frame, in radians.
    #[schemars(title = "Pulse Rate", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub pulse_rate: f32,
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self {
            eye_markers: vec!["eye".into()],
            weapon_markers: vec![
                "sword".into(),
                "blade".into(),
                "scythe".into(),
                "weapon".into(),
            ],
            eye_tint: [1.0, 0.3, 0.1],
            weapon_tint: [0.35, 0.6, 1.0],
            base_intensity: 0.7,
            pulse_amplitude: 0.3,
            pulse_rate: 0.05,
        }
    }
}
