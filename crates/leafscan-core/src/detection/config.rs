use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_LEAF_SIZE, DEFAULT_MIN_LEAF_SIZE};
use crate::error::Result;

use super::filter::NoiseFilter;

/// Options for one connected-component detection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Smallest component (pixels) kept by the threshold filter.
    #[serde(default = "default_min_size")]
    pub min_size: usize,
    /// Largest component (pixels) kept by the threshold filter.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Also drop IQR outliers after the threshold filter.
    #[serde(default)]
    pub iqr_filter: bool,
    /// Keep every member coordinate on each component.
    #[serde(default)]
    pub capture_pixels: bool,
}

fn default_min_size() -> usize {
    DEFAULT_MIN_LEAF_SIZE
}
fn default_max_size() -> usize {
    DEFAULT_MAX_LEAF_SIZE
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_LEAF_SIZE,
            max_size: DEFAULT_MAX_LEAF_SIZE,
            iqr_filter: false,
            capture_pixels: false,
        }
    }
}

impl DetectionConfig {
    /// Build the noise filter, rejecting a size range that is not
    /// `1 <= min_size <= max_size`.
    pub fn noise_filter(&self) -> Result<NoiseFilter> {
        Ok(NoiseFilter::new(self.min_size, self.max_size)?.with_iqr(self.iqr_filter))
    }
}
