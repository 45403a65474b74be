//! Distance and bearing calculations.

use crate::point::Point;
use crate::rect::Rect;

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// Manhattan (taxicab) distance between two points.
pub fn manhattan_distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).abs() + (p2.y - p1.y).abs()
}

/// Squared Euclidean distance. Cheaper than [`distance`] when only comparing
/// magnitudes, since it skips the square root.
pub fn squared_distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    dx * dx + dy * dy
}

/// Distance from a point to a line segment.
///
/// Projects the point onto the segment with the projection parameter clamped
/// to `[0, 1]`, then measures to the projection. A degenerate segment
/// (`seg_start == seg_end`) falls back to point-to-point distance.
pub fn point_to_segment_distance(point: Point, seg_start: Point, seg_end: Point) -> f64 {
    let seg_len_sq = squared_distance(seg_start, seg_end);
    if seg_len_sq == 0.0 {
        return distance(point, seg_start);
    }

    let t = (((point.x - seg_start.x) * (seg_end.x - seg_start.x)
        + (point.y - seg_start.y) * (seg_end.y - seg_start.y))
        / seg_len_sq)
        .clamp(0.0, 1.0);

    let projection = Point::new(
        seg_start.x + t * (seg_end.x - seg_start.x),
        seg_start.y + t * (seg_end.y - seg_start.y),
    );
    distance(point, projection)
}

/// Distance from a point to the nearest edge of a rectangle.
///
/// Returns `0` when the point lies inside (or on the boundary of) the
/// rectangle; otherwise the distance to the nearest clamped edge/corner
/// point.
pub fn point_to_rect_distance(point: Point, rect: &Rect) -> f64 {
    let dx = (rect.x - point.x).max(0.0).max(point.x - rect.right());
    let dy = (rect.y - point.y).max(0.0).max(point.y - rect.bottom());
    (dx * dx + dy * dy).sqrt()
}

/// Bearing from `p1` to `p2` in radians, measured with `atan2`.
pub fn angle(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Bearing from `p1` to `p2` in degrees.
pub fn angle_degrees(p1: Point, p2: Point) -> f64 {
    angle(p1, p2).to_degrees()
}
