use image::RgbImage;
use ndarray::Array2;
use tracing::{debug, info};

use crate::consts::{
    DEFAULT_BRIGHTNESS_TOLERANCE, DEFAULT_HUE_TOLERANCE, DEFAULT_SATURATION_TOLERANCE,
    GRAYSCALE_SATURATION,
};
use crate::error::{LeafscanError, Result};

use super::config::ColorConfig;
use super::hsb::{parse_hex_color, Hsb};

/// Marks pixels whose color is close to any selected leaf color.
#[derive(Clone, Debug)]
pub struct ColorMatcher {
    colors: Vec<Hsb>,
    hue_tolerance: f32,
    saturation_tolerance: f32,
    brightness_tolerance: f32,
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            hue_tolerance: DEFAULT_HUE_TOLERANCE,
            saturation_tolerance: DEFAULT_SATURATION_TOLERANCE,
            brightness_tolerance: DEFAULT_BRIGHTNESS_TOLERANCE,
        }
    }
}

impl ColorMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ColorConfig) -> Result<Self> {
        let mut matcher = Self::new();
        for color in &config.leaf_colors {
            matcher.add_color(parse_hex_color(color)?);
        }
        matcher.set_hue_tolerance(config.hue_tolerance);
        matcher.set_saturation_tolerance(config.saturation_tolerance);
        matcher.set_brightness_tolerance(config.brightness_tolerance);
        Ok(matcher)
    }

    pub fn add_color(&mut self, rgb: [u8; 3]) {
        let hsb = Hsb::from_rgb(rgb);
        debug!(color = %hsb, "Added leaf color");
        self.colors.push(hsb);
    }

    pub fn clear_colors(&mut self) {
        self.colors.clear();
    }

    pub fn colors(&self) -> &[Hsb] {
        &self.colors
    }

    pub fn hue_tolerance(&self) -> f32 {
        self.hue_tolerance
    }

    pub fn saturation_tolerance(&self) -> f32 {
        self.saturation_tolerance
    }

    pub fn brightness_tolerance(&self) -> f32 {
        self.brightness_tolerance
    }

    /// Clamped to `[0, 180]` degrees.
    pub fn set_hue_tolerance(&mut self, degrees: f32) {
        self.hue_tolerance = degrees.clamp(0.0, 180.0);
    }

    /// Clamped to `[0, 1]`.
    pub fn set_saturation_tolerance(&mut self, tolerance: f32) {
        self.saturation_tolerance = tolerance.clamp(0.0, 1.0);
    }

    /// Clamped to `[0, 1]`.
    pub fn set_brightness_tolerance(&mut self, tolerance: f32) {
        self.brightness_tolerance = tolerance.clamp(0.0, 1.0);
    }

    /// Two near-gray colors are compared on brightness alone; otherwise hue,
    /// saturation and brightness must all be within tolerance.
    pub fn colors_match(&self, pixel: &Hsb, leaf: &Hsb) -> bool {
        let brightness_ok =
            (pixel.brightness - leaf.brightness).abs() <= self.brightness_tolerance;

        if pixel.saturation < GRAYSCALE_SATURATION && leaf.saturation < GRAYSCALE_SATURATION {
            return brightness_ok;
        }

        pixel.hue_distance(leaf) <= self.hue_tolerance
            && (pixel.saturation - leaf.saturation).abs() <= self.saturation_tolerance
            && brightness_ok
    }

    pub fn matches(&self, rgb: [u8; 3]) -> bool {
        let pixel = Hsb::from_rgb(rgb);
        self.colors.iter().any(|leaf| self.colors_match(&pixel, leaf))
    }

    /// Binary leaf mask of shape `(height, width)`.
    pub fn classify(&self, image: &RgbImage) -> Result<Array2<bool>> {
        if self.colors.is_empty() {
            return Err(LeafscanError::NoLeafColors);
        }

        let (w, h) = image.dimensions();
        let mut mask = Array2::from_elem((h as usize, w as usize), false);
        let mut foreground = 0usize;

        for (col, row, pixel) in image.enumerate_pixels() {
            if self.matches(pixel.0) {
                mask[[row as usize, col as usize]] = true;
                foreground += 1;
            }
        }

        let total = mask.len().max(1);
        info!(
            foreground,
            percent = 100.0 * foreground as f64 / total as f64,
            "Classified leaf pixels"
        );
        Ok(mask)
    }
}
