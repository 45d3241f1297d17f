//! Axis-aligned bounding boxes in drawing space.

use crate::point::DrawingPoint;
use crate::primitive::Primitive;
use serde::{Deserialize, Serialize};

/// Bounding box in drawing space. `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates a box from two opposite corners given in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// True when `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: &DrawingPoint) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn center(&self) -> DrawingPoint {
        DrawingPoint::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Single-pass union of primitive extents.
///
/// Lines contribute both endpoints, circles their `center ± radius` square.
/// Unsupported primitives are ignored. The result does not depend on the
/// order primitives are fed in.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxAccumulator {
    bounds: Option<BoundingBox>,
    contributed: usize,
}

impl BoundingBoxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, primitive: &Primitive) {
        let Some((min_x, min_y, max_x, max_y)) = primitive.extent() else {
            return;
        };
        let extent = BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        self.bounds = Some(match self.bounds {
            Some(current) => current.union(&extent),
            None => extent,
        });
        self.contributed += 1;
    }

    /// Number of primitives that contributed an extent.
    pub fn contributed(&self) -> usize {
        self.contributed
    }

    /// The accumulated box, or `None` if nothing contributed.
    pub fn result(&self) -> Option<BoundingBox> {
        self.bounds
    }
}

impl<'a> Extend<&'a Primitive> for BoundingBoxAccumulator {
    fn extend<I: IntoIterator<Item = &'a Primitive>>(&mut self, iter: I) {
        for primitive in iter {
            self.accumulate(primitive);
        }
    }
}

impl<'a> FromIterator<&'a Primitive> for BoundingBoxAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a Primitive>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
