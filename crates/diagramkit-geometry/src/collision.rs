//! Collision and containment predicates for canvas objects.
//!
//! All predicates are boundary-inclusive: touching counts as overlapping or
//! containing. Used by the selection controller for rubber-band selection
//! and hit testing, and available to hosts for snapping and layout checks.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::rect::Rect;

/// A circle described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Checks whether two rectangles overlap.
///
/// Overlap fails only when one rectangle's edge lies strictly beyond the
/// other's opposite edge on some axis, so rectangles that merely touch
/// (zero gap) do overlap. Symmetric in its arguments.
pub fn rects_overlap(rect1: &Rect, rect2: &Rect) -> bool {
    !(rect1.right() < rect2.x
        || rect2.right() < rect1.x
        || rect1.bottom() < rect2.y
        || rect2.bottom() < rect1.y)
}

/// Checks whether two circles overlap (touching counts).
pub fn circles_overlap(circle1: &Circle, circle2: &Circle) -> bool {
    let dx = circle2.center.x - circle1.center.x;
    let dy = circle2.center.y - circle1.center.y;
    let radius_sum = circle1.radius + circle2.radius;
    dx * dx + dy * dy <= radius_sum * radius_sum
}

/// Checks whether a circle and a rectangle overlap.
///
/// Tests the circle against the closest point of the rectangle, so corner
/// proximity is handled exactly rather than via the bounding box.
pub fn circle_overlaps_rect(circle: &Circle, rect: &Rect) -> bool {
    let closest_x = circle.center.x.clamp(rect.x, rect.right());
    let closest_y = circle.center.y.clamp(rect.y, rect.bottom());
    let dx = circle.center.x - closest_x;
    let dy = circle.center.y - closest_y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Checks whether a point lies inside a rectangle (boundary-inclusive).
pub fn point_in_rect(point: Point, rect: &Rect) -> bool {
    rect.contains(point)
}

/// Checks whether a point lies inside a circle (boundary-inclusive).
pub fn point_in_circle(point: Point, circle: &Circle) -> bool {
    let dx = point.x - circle.center.x;
    let dy = point.y - circle.center.y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Returns the overlapping sub-rectangle of two rectangles, or `None` when
/// they do not intersect with positive area.
pub fn rect_intersection(rect1: &Rect, rect2: &Rect) -> Option<Rect> {
    let x = rect1.x.max(rect2.x);
    let y = rect1.y.max(rect2.y);
    let width = rect1.right().min(rect2.right()) - x;
    let height = rect1.bottom().min(rect2.bottom()) - y;

    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Rect::new(x, y, width, height))
}

/// Returns the smallest rectangle containing both rectangles.
pub fn bounding_rect(rect1: &Rect, rect2: &Rect) -> Rect {
    let x = rect1.x.min(rect2.x);
    let y = rect1.y.min(rect2.y);
    let width = rect1.right().max(rect2.right()) - x;
    let height = rect1.bottom().max(rect2.bottom()) - y;
    Rect::new(x, y, width, height)
}

/// Checks whether `outer` fully contains `inner` (all four edges of `inner`
/// within `outer`, boundary-inclusive).
pub fn rect_contains(outer: &Rect, inner: &Rect) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}
