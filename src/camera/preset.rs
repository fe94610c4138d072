//! Camera poses, presets, and the preset table.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DioramaError;

/// Orbit configuration the camera can be placed in or blended between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CameraPose {
    /// Elevation in degrees (positive looks down from above).
    pub pitch_deg: f32,
    /// Azimuth in degrees around the vertical axis.
    pub yaw_deg: f32,
    /// Distance from the focus point.
    pub distance: f32,
    /// Height of the focus point.
    pub focus_height: f32,
}

impl CameraPose {
    /// Front view of the whole figure.
    pub const DEFAULT: Self = Self {
        pitch_deg: 0.0,
        yaw_deg: 0.0,
        distance: 6.0,
        focus_height: 1.0,
    };

    /// Shorthand constructor.
    #[must_use]
    pub const fn new(
        pitch_deg: f32,
        yaw_deg: f32,
        distance: f32,
        focus_height: f32,
    ) -> Self {
        Self {
            pitch_deg,
            yaw_deg,
            distance,
            focus_height,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which character a preset frames.
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
pub enum FocusTag {
    /// The knight rig.
    Knight,
    /// The demon rig.
    Demon,
    /// Both rigs, or no particular one.
    #[default]
    #[serde(alias = "unspecified")]
    Both,
}

/// Which part of the scene the camera targets.
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
pub enum ViewMode {
    /// Frame the knight.
    #[default]
    Knight,
    /// Frame the demon.
    Demon,
    /// Frame both characters side by side.
    Versus,
}

impl ViewMode {
    /// Focus tag this mode corresponds to.
    #[must_use]
    pub fn focus(self) -> FocusTag {
        match self {
            Self::Knight => FocusTag::Knight,
            Self::Demon => FocusTag::Demon,
            Self::Versus => FocusTag::Both,
        }
    }

    /// Next mode in Knight → Demon → Versus order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Knight => Self::Demon,
            Self::Demon => Self::Versus,
            Self::Versus => Self::Knight,
        }
    }

    /// Whether a preset tagged `tag` is offered in this mode.
    ///
    /// Single-character modes offer their own presets plus the untagged
    /// ones; the versus mode offers only untagged presets.
    #[must_use]
    pub fn accepts(self, tag: FocusTag) -> bool {
        tag == self.focus() || tag == FocusTag::Both
    }
}

/// A named camera configuration.
///
/// Field names follow the preset files written by the scene authoring
/// scripts (`name`, `rot_x`, `rot_y`, `zoom`, `focus_y`, `focus`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CameraPreset {
    /// Display label.
    #[serde(rename = "name", alias = "label")]
    pub label: String,
    /// Elevation in degrees.
    #[serde(rename = "rot_x", alias = "pitch_deg")]
    pub pitch_deg: f32,
    /// Azimuth in degrees.
    #[serde(rename = "rot_y", alias = "yaw_deg")]
    pub yaw_deg: f32,
    /// Orbit distance.
    #[serde(rename = "zoom", alias = "distance")]
    pub distance: f32,
    /// Focus height.
    #[serde(rename = "focus_y", alias = "focus_height")]
    pub focus_height: f32,
    /// Framed character; absent or `null` means both.
    #[serde(default)]
    pub focus: Option<FocusTag>,
}

impl CameraPreset {
    /// Build a preset framing both characters.
    #[must_use]
    pub fn new(label: &str, pose: CameraPose) -> Self {
        Self {
            label: label.to_owned(),
            pitch_deg: pose.pitch_deg,
            yaw_deg: pose.yaw_deg,
            distance: pose.distance,
            focus_height: pose.focus_height,
            focus: None,
        }
    }

    /// Builder-style focus tag.
    #[must_use]
    pub fn focused_on(mut self, focus: FocusTag) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Effective focus tag.
    #[must_use]
    pub fn focus_tag(&self) -> FocusTag {
        self.focus.unwrap_or_default()
    }

    /// The pose this preset describes.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(
            self.pitch_deg,
            self.yaw_deg,
            self.distance,
            self.focus_height,
        )
    }

    fn is_valid(&self) -> bool {
        [self.pitch_deg, self.yaw_deg, self.distance, self.focus_height]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Ordered list of camera presets.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    presets: Vec<CameraPreset>,
}

impl PresetTable {
    /// Wrap an explicit list. An empty list falls back to the defaults.
    #[must_use]
    pub fn new(presets: Vec<CameraPreset>) -> Self {
        if presets.is_empty() {
            log::warn!("no camera presets given, using defaults");
            return Self::defaults();
        }
        Self { presets }
    }

    /// Built-in presets used when no preset file is available.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            presets: vec![
                CameraPreset::new("Full View", CameraPose::DEFAULT),
                CameraPreset::new(
                    "Sword Focus",
                    CameraPose::new(-14.4, -0.3, 3.5, 1.0),
                ),
                CameraPreset::new(
                    "Head/Eyes Focus",
                    CameraPose::new(20.0, 0.0, 3.0, 2.0),
                ),
                CameraPreset::new(
                    "Cloak Focus",
                    CameraPose::new(5.0, 135.0, 4.0, 1.5),
                ),
                CameraPreset::new(
                    "Roses Focus",
                    CameraPose::new(-15.0, 30.0, 4.0, 0.7),
                ),
            ],
        }
    }

    /// Parse a JSON array of presets.
    ///
    /// Any malformed or non-finite entry rejects the whole list, as does an
    /// empty one.
    pub fn from_json_str(text: &str) -> Result<Self, DioramaError> {
        let presets: Vec<CameraPreset> = serde_json::from_str(text)?;
        if presets.is_empty() {
            return Err(DioramaError::Config("preset list is empty".into()));
        }
        if let Some(bad) = presets.iter().find(|p| !p.is_valid()) {
            return Err(DioramaError::Config(format!(
                "preset '{}' has non-finite values",
                bad.label
            )));
        }
        Ok(Self { presets })
    }

    /// Read and parse a preset file.
    pub fn load(path: &Path) -> Result<Self, DioramaError> {
        let text = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&text)?;
        log::info!(
            "loaded {} camera presets from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load a preset file, falling back to [`defaults`](Self::defaults)
    /// (logged once) on any failure.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!(
                "camera presets {} unavailable, using defaults: {e}",
                path.display()
            );
            Self::defaults()
        })
    }

    /// All presets in file order.
    #[must_use]
    pub fn presets(&self) -> &[CameraPreset] {
        &self.presets
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the table is empty (never true for a constructed table).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Indices of the presets offered in `mode`, in file order.
    #[must_use]
    pub fn subset(&self, mode: ViewMode) -> Vec<usize> {
        self.presets
            .iter()
            .enumerate()
            .filter(|(_, p)| mode.accepts(p.focus_tag()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Preset at absolute index `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CameraPreset> {
        self.presets.get(index)
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::defaults()
    }
}
