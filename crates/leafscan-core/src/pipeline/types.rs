use crate::detection::Detection;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Classifying,
    Detecting,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading image"),
            Self::Classifying => write!(f, "Classifying pixels"),
            Self::Detecting => write!(f, "Detecting leaves"),
            Self::Writing => write!(f, "Writing mask"),
        }
    }
}

/// Result of a leaf scan.
#[derive(Clone, Debug)]
pub struct LeafScanOutput {
    /// Dimensions of the grid the detection ran on (after rescaling).
    pub width: usize,
    pub height: usize,
    pub detection: Detection,
}

/// Progress hooks for the pipeline. All methods default to no-ops.
pub trait ProgressReporter {
    fn begin_stage(&self, _stage: PipelineStage) {}

    fn finish_stage(&self) {}
}

/// Used when `run_leaf_scan` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
