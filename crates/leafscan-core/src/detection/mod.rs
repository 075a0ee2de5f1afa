pub mod components;
pub mod config;
pub mod detector;
pub mod filter;
pub mod grid;
pub mod rank;

pub use components::{BoundingBox, Component, ComponentAccumulator, PixelPoint};
pub use config::DetectionConfig;
pub use detector::{detect_components, detect_with_filter, Detection};
pub use filter::{apply_iqr_filter, iqr_bounds, FilterReport, IqrBounds, NoiseFilter};
pub use grid::{index_to_coords, pixel_index, FnClassifier, PixelClassifier};
pub use rank::{rank_components, DetectionStats};
