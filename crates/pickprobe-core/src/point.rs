//! Two-dimensional points tagged with the coordinate space they live in.
//!
//! Display space is the pixel grid of the rendered canvas (origin top-left,
//! +Y down). Drawing space is the unit system of the source SVG/DXF file
//! (+Y up). The space is a type parameter so that a display point can only
//! become a drawing point through a [`CoordinateTransform`](crate::CoordinateTransform).

use std::fmt;
use std::marker::PhantomData;

/// Marker for pixel coordinates on the display canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplaySpace;

/// Marker for coordinates in the units of the loaded drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawingSpace;

/// An immutable point in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D<S> {
    pub x: f64,
    pub y: f64,
    space: PhantomData<S>,
}

/// A point in display (pixel) space.
pub type DisplayPoint = Point2D<DisplaySpace>;

/// A point in drawing space.
pub type DrawingPoint = Point2D<DrawingSpace>;

impl<S> Point2D<S> {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Euclidean distance to another point in the same space.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S> From<(f64, f64)> for Point2D<S> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl<S> fmt::Display for Point2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
