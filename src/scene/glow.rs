//! Emissive part categories and the shared glow pulse.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::GlowOptions;
use crate::util::markers::best_marker_match;

/// Which glow treatment a part receives.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum GlowCategory {
    /// Not emissive; drawn in the first pass with a zero tint.
    #[default]
    None,
    /// Glowing eyes.
    Eyes,
    /// Glowing weapon edge or runes.
    Weapon,
}

impl GlowCategory {
    /// Whether parts of this category are drawn in the emissive pass.
    #[must_use]
    pub fn is_emissive(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Resolve a part's category from its name.
    #[must_use]
    pub fn classify(name: &str, options: &GlowOptions) -> Self {
        let eyes = options.eye_markers.iter().map(|m| (m.as_str(), Self::Eyes));
        let weapons = options
            .weapon_markers
            .iter()
            .map(|m| (m.as_str(), Self::Weapon));
        best_marker_match(name, eyes.chain(weapons)).unwrap_or_default()
    }
}

/// Pulse intensity shared by every emissive part in a frame.
///
/// Driven by the frame counter rather than `dt`, so the pulse advances one
/// fixed step per presented frame.
#[must_use]
pub fn pulse_intensity(ticks: u64, options: &GlowOptions) -> f32 {
    let phase = (ticks as f64 * f64::from(options.pulse_rate)).sin() as f32;
    (options.base_intensity + options.pulse_amplitude * phase).max(0.0)
}

/// Additive tint for a part of `category` at pulse `intensity`.
#[must_use]
pub fn emissive_tint(
    category: GlowCategory,
    intensity: f32,
    options: &GlowOptions,
) -> Vec3 {
    match category {
        GlowCategory::None => Vec3::ZERO,
        GlowCategory::Eyes => Vec3::from(options.eye_tint) * intensity,
        GlowCategory::Weapon => Vec3::from(options.weapon_tint) * intensity,
    }
}
