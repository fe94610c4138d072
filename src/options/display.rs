use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Window and frame pacing settings.
pub struct DisplayOptions {
    /// Initial window width in logical pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Initial window height in logical pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Window title prefix.
    #[schemars(skip)]
    pub title: String,
    /// Clear color (RGBA).
    #[schemars(title = "Background")]
    pub background_color: [f32; 4],
    /// Image drawn full-screen behind the scene instead of the plain
    /// clear color.
    #[schemars(skip)]
    pub background_image: Option<PathBuf>,
    /// Frame-rate cap (0 = unlimited).
    #[schemars(title = "FPS Cap", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 850,
            title: "Knight Model Viewer".into(),
            background_color: [0.05, 0.05, 0.1, 1.0],
            background_image: None,
            target_fps: 60,
        }
    }
}

impl DisplayOptions {
    /// Width over height, guarding against a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
