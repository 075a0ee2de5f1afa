use std::fmt;

use serde::Serialize;

/// A pixel coordinate, `x` is the column and `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PixelPoint {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Inclusive axis-aligned bounds of a set of pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    /// Bounds of a single pixel.
    pub fn around(point: PixelPoint) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Grow to include `point`.
    pub fn include(&mut self, point: PixelPoint) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    /// Integer midpoint of the box.
    pub fn center(&self) -> PixelPoint {
        PixelPoint {
            x: (self.min_x + self.max_x) / 2,
            y: (self.min_y + self.max_y) / 2,
        }
    }
}

/// Mutable per-root record filled during the extraction pass.
///
/// Always created from the first pixel seen for its root, so the bounding
/// box is never empty.
#[derive(Clone, Debug)]
pub struct ComponentAccumulator {
    root: usize,
    size: usize,
    added: usize,
    bbox: BoundingBox,
    pixels: Option<Vec<PixelPoint>>,
}

impl ComponentAccumulator {
    /// Start a record for `root` whose set holds `size` elements.
    pub fn new(root: usize, size: usize, first: PixelPoint, capture_pixels: bool) -> Self {
        let pixels = capture_pixels.then(|| {
            let mut pixels = Vec::with_capacity(size);
            pixels.push(first);
            pixels
        });
        Self {
            root,
            size,
            added: 1,
            bbox: BoundingBox::around(first),
            pixels,
        }
    }

    pub fn add_pixel(&mut self, point: PixelPoint) {
        self.bbox.include(point);
        self.added += 1;
        if let Some(pixels) = self.pixels.as_mut() {
            pixels.push(point);
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Pixels added so far.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Freeze into an unranked [`Component`].
    pub fn finish(self) -> Component {
        debug_assert_eq!(
            self.added, self.size,
            "component {} saw {} pixels for a set of {}",
            self.root, self.added, self.size
        );
        Component {
            root: self.root,
            size: self.size,
            bbox: self.bbox,
            rank: None,
            pixels: self.pixels,
        }
    }
}

/// A connected cluster of foreground pixels (a "leaf").
#[derive(Clone, Debug, Serialize)]
pub struct Component {
    root: usize,
    size: usize,
    bbox: BoundingBox,
    rank: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pixels: Option<Vec<PixelPoint>>,
}

impl Component {
    /// An unranked component without captured pixels.
    pub fn new(root: usize, size: usize, bbox: BoundingBox) -> Self {
        Self {
            root,
            size,
            bbox,
            rank: None,
            pixels: None,
        }
    }

    /// Union-find root this component was extracted from. Only meaningful
    /// within the detection run that produced it.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Number of pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// 1-based position by descending size, `None` until ranked.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = Some(rank);
    }

    /// Member coordinates in row-major order, when pixel capture was on.
    pub fn pixels(&self) -> Option<&[PixelPoint]> {
        self.pixels.as_deref()
    }

    pub fn center(&self) -> PixelPoint {
        self.bbox.center()
    }

    pub fn width(&self) -> usize {
        self.bbox.width()
    }

    pub fn height(&self) -> usize {
        self.bbox.height()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank.map_or_else(|| "-".to_string(), |r| r.to_string());
        write!(
            f,
            "Leaf #{} [root={}, size={} pixels, bounds=({},{})-({},{})]",
            rank,
            self.root,
            self.size,
            self.bbox.min_x,
            self.bbox.min_y,
            self.bbox.max_x,
            self.bbox.max_y
        )
    }
}
