#![allow(dead_code)]

use leafscan_core::detection::{BoundingBox, Component};
use ndarray::Array2;

/// Build a mask from text rows, `#` is foreground and anything else
/// background. All rows must have the same length.
pub fn mask_from_rows(rows: &[&str]) -> Array2<bool> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut mask = Array2::from_elem((height, width), false);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged row {y}");
        for (x, ch) in row.chars().enumerate() {
            mask[[y, x]] = ch == '#';
        }
    }
    mask
}

/// Build a mask with the given row-major indices set.
pub fn mask_from_indices(width: usize, height: usize, indices: &[usize]) -> Array2<bool> {
    let mut mask = Array2::from_elem((height, width), false);
    for &i in indices {
        mask[[i / width, i % width]] = true;
    }
    mask
}

/// Unranked component of the given size with a dummy bounding box.
pub fn component_with_size(root: usize, size: usize) -> Component {
    Component::new(
        root,
        size,
        BoundingBox {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
        },
    )
}

pub fn sizes(components: &[Component]) -> Vec<usize> {
    components.iter().map(Component::size).collect()
}
