use tracing::info;

use crate::color::ColorMatcher;
use crate::detection::detect_components;
use crate::error::Result;
use crate::io::image_io::{load_rgb, save_mask};

use super::config::LeafScanConfig;
use super::types::{LeafScanOutput, NoOpReporter, PipelineStage, ProgressReporter};

/// Load, classify, detect and optionally export the mask.
pub fn run_leaf_scan(config: &LeafScanConfig) -> Result<LeafScanOutput> {
    run_leaf_scan_reported(config, &NoOpReporter)
}

/// As [`run_leaf_scan`], reporting each stage to `reporter`.
pub fn run_leaf_scan_reported(
    config: &LeafScanConfig,
    reporter: &dyn ProgressReporter,
) -> Result<LeafScanOutput> {
    // Config errors surface before the image is read.
    let matcher = ColorMatcher::from_config(&config.color)?;
    let filter = config.detection.noise_filter()?;

    reporter.begin_stage(PipelineStage::Loading);
    let process_size = config.rescale.then_some(config.process_size);
    let image = load_rgb(&config.input, process_size)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Classifying);
    let mask = matcher.classify(&image)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Detecting);
    let detection = detect_components(&mask, &config.detection)?;
    reporter.finish_stage();
    info!(
        leaves = detection.stats().component_count,
        min = filter.min_size(),
        max = filter.max_size(),
        iqr = filter.iqr_enabled(),
        "Leaf scan complete"
    );

    if let Some(ref path) = config.mask_output {
        reporter.begin_stage(PipelineStage::Writing);
        save_mask(&mask, path)?;
        reporter.finish_stage();
        info!(output = %path.display(), "Mask saved");
    }

    let (height, width) = mask.dim();
    Ok(LeafScanOutput {
        width,
        height,
        detection,
    })
}
