use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::ColorConfig;
use crate::consts::DEFAULT_PROCESS_SIZE;
use crate::detection::DetectionConfig;

/// Everything needed to go from an image file to ranked leaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeafScanConfig {
    pub input: PathBuf,
    /// Where to write the binary leaf mask, if anywhere.
    #[serde(default)]
    pub mask_output: Option<PathBuf>,
    /// Resample to fit `process_size` before classification.
    #[serde(default = "default_true")]
    pub rescale: bool,
    #[serde(default = "default_process_size")]
    pub process_size: u32,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

fn default_true() -> bool {
    true
}
fn default_process_size() -> u32 {
    DEFAULT_PROCESS_SIZE
}

impl Default for LeafScanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("leaves.png"),
            mask_output: None,
            rescale: true,
            process_size: DEFAULT_PROCESS_SIZE,
            color: ColorConfig::default(),
            detection: DetectionConfig::default(),
        }
    }
}
