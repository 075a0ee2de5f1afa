use tracing::debug;

use crate::consts::{
    DEFAULT_MAX_LEAF_SIZE, DEFAULT_MIN_LEAF_SIZE, IQR_FENCE_MULTIPLIER, IQR_MIN_COMPONENTS,
};
use crate::error::{LeafscanError, Result};

use super::components::Component;

/// Removes components that are too small (noise) or too large (background),
/// and optionally statistical outliers by the IQR rule.
///
/// Holds `1 <= min_size <= max_size` at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseFilter {
    min_size: usize,
    max_size: usize,
    iqr: bool,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_LEAF_SIZE,
            max_size: DEFAULT_MAX_LEAF_SIZE,
            iqr: false,
        }
    }
}

/// Counts reported by [`NoiseFilter::apply`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub removed_by_size: usize,
    pub removed_as_outliers: usize,
}

impl NoiseFilter {
    /// Strict constructor: a range outside `1 <= min_size <= max_size` is an
    /// error rather than being clamped.
    pub fn new(min_size: usize, max_size: usize) -> Result<Self> {
        if min_size == 0 || max_size < min_size {
            return Err(LeafscanError::InvalidSizeRange {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self {
            min_size,
            max_size,
            iqr: false,
        })
    }

    pub fn with_iqr(mut self, enabled: bool) -> Self {
        self.iqr = enabled;
        self
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn iqr_enabled(&self) -> bool {
        self.iqr
    }

    /// Floors at 1. Raises `max_size` if it would fall below the new minimum.
    pub fn set_min_size(&mut self, min_size: usize) {
        self.min_size = min_size.max(1);
        self.max_size = self.max_size.max(self.min_size);
    }

    /// Floors at the current `min_size`.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(self.min_size);
    }

    pub fn set_size_range(&mut self, min_size: usize, max_size: usize) {
        self.min_size = min_size.max(1);
        self.max_size = max_size.max(self.min_size);
    }

    /// Inclusive on both ends.
    pub fn accepts(&self, size: usize) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }

    /// Drop components outside `[min_size, max_size]`. Returns how many went.
    pub fn apply_threshold(&self, components: &mut Vec<Component>) -> usize {
        let before = components.len();
        components.retain(|c| self.accepts(c.size()));
        let removed = before - components.len();
        debug!(
            removed,
            remaining = components.len(),
            min = self.min_size,
            max = self.max_size,
            "Size threshold applied"
        );
        removed
    }

    /// Threshold filter, then the IQR filter when enabled.
    pub fn apply(&self, components: &mut Vec<Component>) -> FilterReport {
        let removed_by_size = self.apply_threshold(components);
        let removed_as_outliers = if self.iqr {
            apply_iqr_filter(components)
        } else {
            0
        };
        FilterReport {
            removed_by_size,
            removed_as_outliers,
        }
    }
}

/// Quartiles and Tukey fences of a size distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Inclusive on both fences.
    pub fn contains(&self, size: usize) -> bool {
        let size = size as f64;
        size >= self.lower && size <= self.upper
    }
}

/// Fences for `sizes`, or `None` with fewer than four samples.
///
/// Quartiles are read at sorted positions `n/4` and `3n/4` (truncating, no
/// interpolation).
pub fn iqr_bounds(sizes: &[usize]) -> Option<IqrBounds> {
    let n = sizes.len();
    if n < IQR_MIN_COMPONENTS {
        return None;
    }

    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();

    let q1 = sorted[n / 4] as f64;
    let q3 = sorted[3 * n / 4] as f64;
    let iqr = q3 - q1;

    Some(IqrBounds {
        q1,
        q3,
        iqr,
        lower: q1 - IQR_FENCE_MULTIPLIER * iqr,
        upper: q3 + IQR_FENCE_MULTIPLIER * iqr,
    })
}

/// Remove size outliers by the IQR rule. Returns how many went.
pub fn apply_iqr_filter(components: &mut Vec<Component>) -> usize {
    let sizes: Vec<usize> = components.iter().map(Component::size).collect();
    let Some(bounds) = iqr_bounds(&sizes) else {
        debug!(count = sizes.len(), "Too few components for IQR filter");
        return 0;
    };

    let before = components.len();
    components.retain(|c| bounds.contains(c.size()));
    let removed = before - components.len();
    debug!(
        q1 = bounds.q1,
        q3 = bounds.q3,
        iqr = bounds.iqr,
        lower = bounds.lower,
        upper = bounds.upper,
        removed,
        "IQR filter applied"
    );
    removed
}
