use std::fmt;

use serde::Serialize;

use super::components::Component;

/// Sort by size descending and number the components from 1.
///
/// The sort is stable: equal sizes keep their discovery order.
pub fn rank_components(components: &mut [Component]) {
    components.sort_by(|a, b| b.size().cmp(&a.size()));
    for (i, component) in components.iter_mut().enumerate() {
        component.set_rank(i + 1);
    }
}

/// Aggregate figures for one detection run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DetectionStats {
    /// `width * height`.
    pub total_pixels: usize,
    pub foreground_pixels: usize,
    /// Unions that actually merged two sets.
    pub union_operations: usize,
    /// Components found before noise filtering.
    pub raw_components: usize,
    pub component_count: usize,
    /// Truncating mean. `None` when nothing survived filtering.
    pub average_size: Option<usize>,
    pub largest_size: Option<usize>,
    pub smallest_size: Option<usize>,
}

impl DetectionStats {
    /// `ranked` must already be in rank order.
    pub fn summarize(
        total_pixels: usize,
        foreground_pixels: usize,
        union_operations: usize,
        raw_components: usize,
        ranked: &[Component],
    ) -> Self {
        let component_count = ranked.len();
        let total: usize = ranked.iter().map(Component::size).sum();
        let average_size = (component_count > 0).then(|| total / component_count);

        Self {
            total_pixels,
            foreground_pixels,
            union_operations,
            raw_components,
            component_count,
            average_size,
            largest_size: ranked.first().map(Component::size),
            smallest_size: ranked.last().map(Component::size),
        }
    }
}

impl fmt::Display for DetectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total pixels:      {}", self.total_pixels)?;
        writeln!(f, "Foreground pixels: {}", self.foreground_pixels)?;
        writeln!(f, "Union operations:  {}", self.union_operations)?;
        writeln!(f, "Raw clusters:      {}", self.raw_components)?;
        write!(f, "Leaves detected:   {}", self.component_count)?;
        if let (Some(avg), Some(largest), Some(smallest)) =
            (self.average_size, self.largest_size, self.smallest_size)
        {
            writeln!(f)?;
            writeln!(f, "Average size:      {avg}")?;
            writeln!(f, "Largest size:      {largest}")?;
            write!(f, "Smallest size:     {smallest}")?;
        }
        Ok(())
    }
}
