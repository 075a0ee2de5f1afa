use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, info};

use crate::disjoint_set::DisjointSet;
use crate::error::{LeafscanError, Result};

use super::components::{Component, ComponentAccumulator, PixelPoint};
use super::config::DetectionConfig;
use super::filter::{apply_iqr_filter, NoiseFilter};
use super::grid::{pixel_index, PixelClassifier};
use super::rank::{rank_components, DetectionStats};

/// Ranked components from one detection run plus the union-find they came
/// from, kept for "which leaf is at (x, y)" queries.
#[derive(Clone, Debug)]
pub struct Detection {
    components: Vec<Component>,
    stats: DetectionStats,
    disjoint_set: DisjointSet,
    width: usize,
    height: usize,
    /// Root id -> position in `components`.
    by_root: HashMap<usize, usize>,
}

impl Detection {
    fn new(
        components: Vec<Component>,
        stats: DetectionStats,
        disjoint_set: DisjointSet,
        width: usize,
        height: usize,
    ) -> Self {
        let mut detection = Self {
            components,
            stats,
            disjoint_set,
            width,
            height,
            by_root: HashMap::new(),
        };
        detection.reindex();
        detection
    }

    fn reindex(&mut self) {
        self.by_root = self
            .components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.root(), i))
            .collect();
    }

    /// Components in rank order (rank 1 = largest).
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    pub fn disjoint_set(&self) -> &DisjointSet {
        &self.disjoint_set
    }

    pub fn disjoint_set_mut(&mut self) -> &mut DisjointSet {
        &mut self.disjoint_set
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component with 1-based `rank`, or `None` outside `1..=len`.
    pub fn component_by_rank(&self, rank: usize) -> Option<&Component> {
        rank.checked_sub(1).and_then(|i| self.components.get(i))
    }

    /// Component containing pixel `(x, y)`.
    ///
    /// `None` for out-of-bounds or background pixels and for pixels whose
    /// cluster was filtered out. Background pixels are never unioned, so
    /// their root is themselves and has no component.
    pub fn component_at(&mut self, x: usize, y: usize) -> Option<&Component> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let root = self
            .disjoint_set
            .find(pixel_index(x, y, self.width))
            .ok()?;
        self.by_root.get(&root).map(|&i| &self.components[i])
    }

    /// Remove IQR outliers from the current components, then re-rank.
    /// Returns how many were removed.
    pub fn apply_iqr_filter(&mut self) -> usize {
        let removed = apply_iqr_filter(&mut self.components);
        rank_components(&mut self.components);
        self.stats = DetectionStats::summarize(
            self.stats.total_pixels,
            self.stats.foreground_pixels,
            self.stats.union_operations,
            self.stats.raw_components,
            &self.components,
        );
        self.reindex();
        removed
    }
}

/// Find, filter and rank the 4-connected foreground clusters of `classifier`.
///
/// Fails before doing any work if the grid is empty or the configured size
/// range is invalid. Zero surviving components is a valid result.
pub fn detect_components<C>(classifier: &C, config: &DetectionConfig) -> Result<Detection>
where
    C: PixelClassifier + ?Sized,
{
    let filter = config.noise_filter()?;
    detect_with_filter(classifier, &filter, config.capture_pixels)
}

/// As [`detect_components`], with an already built filter.
pub fn detect_with_filter<C>(
    classifier: &C,
    filter: &NoiseFilter,
    capture_pixels: bool,
) -> Result<Detection>
where
    C: PixelClassifier + ?Sized,
{
    let width = classifier.width();
    let height = classifier.height();
    let total_pixels = match width.checked_mul(height) {
        Some(n) if n > 0 => n,
        _ => return Err(LeafscanError::InvalidDimensions { width, height }),
    };

    let start = Instant::now();
    let mut disjoint_set = DisjointSet::new(total_pixels);
    debug!(total_pixels, "Initialized disjoint sets");

    let (foreground_pixels, union_operations) =
        union_adjacent(classifier, &mut disjoint_set, width, height)?;
    debug!(foreground_pixels, union_operations, "Adjacent pixels unioned");

    let mut components =
        extract_components(classifier, &mut disjoint_set, width, height, capture_pixels)?;
    let raw_components = components.len();
    debug!(raw_components, "Raw clusters extracted");

    let report = filter.apply(&mut components);
    rank_components(&mut components);

    let stats = DetectionStats::summarize(
        total_pixels,
        foreground_pixels,
        union_operations,
        raw_components,
        &components,
    );
    if let (Some(largest), Some(smallest)) = (stats.largest_size, stats.smallest_size) {
        debug!(largest, smallest, "Leaves ranked");
    }

    info!(
        total_pixels,
        foreground_pixels,
        union_operations,
        raw_components,
        removed_by_size = report.removed_by_size,
        removed_as_outliers = report.removed_as_outliers,
        leaves = stats.component_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Leaf detection complete"
    );

    Ok(Detection::new(components, stats, disjoint_set, width, height))
}

/// Union every foreground pixel with its right and down foreground
/// neighbours. Returns `(foreground_pixels, successful_unions)`.
fn union_adjacent<C>(
    classifier: &C,
    disjoint_set: &mut DisjointSet,
    width: usize,
    height: usize,
) -> Result<(usize, usize)>
where
    C: PixelClassifier + ?Sized,
{
    let mut foreground = 0;
    let mut unions = 0;

    for y in 0..height {
        for x in 0..width {
            if !classifier.is_foreground(x, y) {
                continue;
            }
            foreground += 1;
            let index = pixel_index(x, y, width);

            if x + 1 < width
                && classifier.is_foreground(x + 1, y)
                && disjoint_set.union(index, index + 1)?
            {
                unions += 1;
            }
            if y + 1 < height
                && classifier.is_foreground(x, y + 1)
                && disjoint_set.union(index, index + width)?
            {
                unions += 1;
            }
        }
    }

    Ok((foreground, unions))
}

/// One accumulator per root, in order of first appearance in the scan.
fn extract_components<C>(
    classifier: &C,
    disjoint_set: &mut DisjointSet,
    width: usize,
    height: usize,
    capture_pixels: bool,
) -> Result<Vec<Component>>
where
    C: PixelClassifier + ?Sized,
{
    let mut accumulators: Vec<ComponentAccumulator> = Vec::new();
    let mut slots: HashMap<usize, usize> = HashMap::new();

    for y in 0..height {
        for x in 0..width {
            if !classifier.is_foreground(x, y) {
                continue;
            }
            let point = PixelPoint { x, y };
            let root = disjoint_set.find(pixel_index(x, y, width))?;

            match slots.get(&root) {
                Some(&slot) => accumulators[slot].add_pixel(point),
                None => {
                    let size = disjoint_set.set_size(root)?;
                    slots.insert(root, accumulators.len());
                    accumulators.push(ComponentAccumulator::new(
                        root,
                        size,
                        point,
                        capture_pixels,
                    ));
                }
            }
        }
    }

    Ok(accumulators
        .into_iter()
        .map(ComponentAccumulator::finish)
        .collect())
}
