pub mod config;
mod orchestrator;
mod types;

pub use config::LeafScanConfig;
pub use orchestrator::{run_leaf_scan, run_leaf_scan_reported};
pub use types::{LeafScanOutput, PipelineStage, ProgressReporter};
