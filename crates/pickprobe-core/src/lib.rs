//! # PickProbe Core
//!
//! Core geometry for PickProbe.
//! Provides the coordinate-space aware point type, drawing primitives,
//! bounding box accumulation and the fitted display/drawing transform.

pub mod bounds;
pub mod canvas;
pub mod constants;
pub mod error;
pub mod point;
pub mod primitive;
pub mod transform;

pub use bounds::{BoundingBox, BoundingBoxAccumulator};
pub use canvas::Canvas;
pub use error::{Result, TransformError};
pub use point::{DisplayPoint, DisplaySpace, DrawingPoint, DrawingSpace, Point2D};
pub use primitive::Primitive;
pub use transform::CoordinateTransform;
