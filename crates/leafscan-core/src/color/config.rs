use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BRIGHTNESS_TOLERANCE, DEFAULT_HUE_TOLERANCE, DEFAULT_SATURATION_TOLERANCE,
};

/// Leaf colors and matching tolerances for the pixel classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Colors that count as leaf, as `#rrggbb`.
    #[serde(default)]
    pub leaf_colors: Vec<String>,
    /// Maximum hue difference in degrees (0-180).
    #[serde(default = "default_hue_tolerance")]
    pub hue_tolerance: f32,
    /// Maximum saturation difference (0.0-1.0).
    #[serde(default = "default_saturation_tolerance")]
    pub saturation_tolerance: f32,
    /// Maximum brightness difference (0.0-1.0).
    #[serde(default = "default_brightness_tolerance")]
    pub brightness_tolerance: f32,
}

fn default_hue_tolerance() -> f32 {
    DEFAULT_HUE_TOLERANCE
}
fn default_saturation_tolerance() -> f32 {
    DEFAULT_SATURATION_TOLERANCE
}
fn default_brightness_tolerance() -> f32 {
    DEFAULT_BRIGHTNESS_TOLERANCE
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            leaf_colors: Vec::new(),
            hue_tolerance: DEFAULT_HUE_TOLERANCE,
            saturation_tolerance: DEFAULT_SATURATION_TOLERANCE,
            brightness_tolerance: DEFAULT_BRIGHTNESS_TOLERANCE,
        }
    }
}
