/// Default minimum component size (pixels) kept by the threshold filter.
pub const DEFAULT_MIN_LEAF_SIZE: usize = 10;

/// Default maximum component size (pixels) kept by the threshold filter.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 50_000;

/// Fewer surviving components than this and the IQR filter is a no-op.
pub const IQR_MIN_COMPONENTS: usize = 4;

/// Tukey fence multiplier applied to the interquartile range.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Longest side (pixels) an image is scaled to before classification.
pub const DEFAULT_PROCESS_SIZE: u32 = 512;

/// Default hue tolerance in degrees (0-180).
pub const DEFAULT_HUE_TOLERANCE: f32 = 30.0;

/// Default saturation tolerance (0.0-1.0).
pub const DEFAULT_SATURATION_TOLERANCE: f32 = 0.3;

/// Default brightness tolerance (0.0-1.0).
pub const DEFAULT_BRIGHTNESS_TOLERANCE: f32 = 0.3;

/// Below this saturation both colors are compared as grays (brightness only).
pub const GRAYSCALE_SATURATION: f32 = 0.1;
