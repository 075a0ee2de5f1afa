use ndarray::Array2;

use super::components::PixelPoint;

/// Read-only view of a binary pixel grid.
///
/// Implementations must answer `is_foreground` deterministically for the
/// duration of one detection pass. Coordinates outside the grid are
/// background.
pub trait PixelClassifier {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn is_foreground(&self, x: usize, y: usize) -> bool;
}

/// Row-major mask of shape `(height, width)`.
impl PixelClassifier for Array2<bool> {
    fn width(&self) -> usize {
        self.ncols()
    }

    fn height(&self) -> usize {
        self.nrows()
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get((y, x)).copied().unwrap_or(false)
    }
}

/// Adapts a `(x, y) -> bool` closure to [`PixelClassifier`].
pub struct FnClassifier<F> {
    width: usize,
    height: usize,
    predicate: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(usize, usize) -> bool,
{
    pub fn new(width: usize, height: usize, predicate: F) -> Self {
        Self {
            width,
            height,
            predicate,
        }
    }
}

impl<F> PixelClassifier for FnClassifier<F>
where
    F: Fn(usize, usize) -> bool,
{
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_foreground(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && (self.predicate)(x, y)
    }
}

/// Row-major element index of pixel `(x, y)`.
#[inline]
pub fn pixel_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Inverse of [`pixel_index`].
#[inline]
pub fn index_to_coords(index: usize, width: usize) -> PixelPoint {
    PixelPoint {
        x: index % width,
        y: index / width,
    }
}
