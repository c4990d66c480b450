use std::fmt;

use crate::types::fstr;

/// `BoundingBox` defines an axis-aligned rectangular region in user coordinates.
///
/// `x1`/`y1` are the minimum coordinates and `x2`/`y2` the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Folds any number of `BoundingBox` values into their union.
///
/// An empty builder represents 'no content'.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    bbox: Option<BoundingBox>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self { bbox: None }
    }

    pub fn extend(&mut self, bbox: BoundingBox) -> &Self {
        if let Some(ref mut b) = self.bbox {
            *b = b.combine(&bbox);
        } else {
            self.bbox = Some(bbox);
        }
        self
    }

    /// Extend with a single point.
    pub fn add_point(&mut self, (x, y): (f32, f32)) -> &Self {
        self.extend(BoundingBox::new(x, y, x, y))
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.bbox
    }
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bounding box of two arbitrary corner points.
    pub fn from_corners((ax, ay): (f32, f32), (bx, by): (f32, f32)) -> Self {
        Self::new(ax.min(bx), ay.min(by), ax.max(bx), ay.max(by))
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }

    /// dilate the bounding box by the given absolute amount in each direction
    pub fn expanded(&self, exp_x: f32, exp_y: f32) -> Self {
        Self {
            x1: self.x1 - exp_x,
            y1: self.y1 - exp_y,
            x2: self.x2 + exp_x,
            y2: self.y2 + exp_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            fstr(self.x1),
            fstr(self.y1),
            fstr(self.x2),
            fstr(self.y2)
        )
    }
}
