use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use leafscan_core::color::ColorConfig;
use leafscan_core::consts::{
    DEFAULT_BRIGHTNESS_TOLERANCE, DEFAULT_HUE_TOLERANCE, DEFAULT_PROCESS_SIZE,
    DEFAULT_SATURATION_TOLERANCE,
};
use leafscan_core::detection::{Component, DetectionConfig, DetectionStats};
use leafscan_core::pipeline::{
    run_leaf_scan_reported, LeafScanConfig, PipelineStage, ProgressReporter,
};
use serde::Serialize;
use tracing::debug;

use crate::summary::print_leaf_summary;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image (PNG, JPEG, TIFF, ...)
    pub file: PathBuf,

    /// Scan config file (TOML); its input path is replaced by FILE
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leaf color as #rrggbb (repeatable)
    #[arg(short, long = "color")]
    pub colors: Vec<String>,

    /// Hue tolerance in degrees (0-180)
    #[arg(long, default_value_t = DEFAULT_HUE_TOLERANCE)]
    pub hue_tol: f32,

    /// Saturation tolerance (0-1)
    #[arg(long, default_value_t = DEFAULT_SATURATION_TOLERANCE)]
    pub sat_tol: f32,

    /// Brightness tolerance (0-1)
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS_TOLERANCE)]
    pub bri_tol: f32,

    /// Smallest cluster (pixels) counted as a leaf
    #[arg(long, default_value = "10")]
    pub min_size: usize,

    /// Largest cluster (pixels) counted as a leaf
    #[arg(long, default_value = "50000")]
    pub max_size: usize,

    /// Also drop size outliers (IQR rule)
    #[arg(long)]
    pub iqr: bool,

    /// Process the image at its original resolution
    #[arg(long)]
    pub no_rescale: bool,

    /// Longest side the image is scaled to before detection
    #[arg(long, default_value_t = DEFAULT_PROCESS_SIZE)]
    pub process_size: u32,

    /// Save the binary leaf mask as PNG
    #[arg(long)]
    pub mask: Option<PathBuf>,

    /// Show top N leaves only
    #[arg(long, default_value = "20")]
    pub top: usize,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    width: usize,
    height: usize,
    stats: &'a DetectionStats,
    leaves: &'a [Component],
}

struct SpinnerReporter {
    pb: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.pb.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.pb.inc(1);
    }
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: LeafScanConfig =
            toml::from_str(&contents).context("Invalid scan config")?;
        config.input = args.file.clone();
        config
    } else {
        build_config_from_args(args)
    };
    debug!(?config, "Resolved scan config");

    let pb = if args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let reporter = SpinnerReporter { pb };
    let output = run_leaf_scan_reported(&config, &reporter)
        .with_context(|| format!("Leaf scan failed for {}", config.input.display()))?;
    reporter.pb.finish_and_clear();

    let detection = &output.detection;
    let shown = &detection.components()[..args.top.min(detection.components().len())];

    if args.json {
        let report = JsonReport {
            width: output.width,
            height: output.height,
            stats: detection.stats(),
            leaves: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_leaf_summary(&config, output.width, output.height, detection.stats(), shown);
        if let Some(ref path) = config.mask_output {
            println!("\nMask saved to {}", path.display());
        }
    }

    Ok(())
}

fn build_config_from_args(args: &DetectArgs) -> LeafScanConfig {
    LeafScanConfig {
        input: args.file.clone(),
        mask_output: args.mask.clone(),
        rescale: !args.no_rescale,
        process_size: args.process_size,
        color: ColorConfig {
            leaf_colors: args.colors.clone(),
            hue_tolerance: args.hue_tol,
            saturation_tolerance: args.sat_tol,
            brightness_tolerance: args.bri_tol,
        },
        detection: DetectionConfig {
            min_size: args.min_size,
            max_size: args.max_size,
            iqr_filter: args.iqr,
            capture_pixels: false,
        },
    }
}
