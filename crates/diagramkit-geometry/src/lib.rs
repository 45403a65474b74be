//! # DiagramKit Geometry
//!
//! Geometry primitives and pure computations for the DiagramKit canvas engine:
//! - **Primitives**: [`Point`], [`Rect`], [`Circle`] value types
//! - **Transform**: 2×3 affine matrix mapping canvas space to screen space,
//!   with composition and coordinate conversion in both directions
//! - **Collision**: overlap, containment, and intersection predicates
//! - **Distance**: Euclidean/Manhattan metrics, point-to-segment and
//!   point-to-rectangle distance, `atan2` bearings
//!
//! Everything in this crate is a pure function over plain `f64` value types.
//! There is no coordinate-space tagging: whether a point is in canvas or
//! screen space is determined by the caller's context.

pub mod collision;
pub mod distance;
pub mod point;
pub mod rect;
pub mod transform;

pub use collision::{
    bounding_rect, circle_overlaps_rect, circles_overlap, point_in_circle, point_in_rect,
    rect_contains, rect_intersection, rects_overlap, Circle,
};
pub use distance::{
    angle, angle_degrees, distance, manhattan_distance, point_to_rect_distance,
    point_to_segment_distance, squared_distance,
};
pub use point::Point;
pub use rect::Rect;
pub use transform::Transform;
