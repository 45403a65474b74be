//! Axis-aligned rectangle value type.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An axis-aligned rectangle defined by its top-left corner and extents.
///
/// Invariant: `width >= 0` and `height >= 0`. Interactive code that drags out
/// a rectangle in an arbitrary direction should normalize the signed deltas
/// with [`Rect::from_corners`] before a `Rect` is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its origin and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle spanning two opposite corners, normalizing the
    /// orientation so the extents come out non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagramkit_geometry::{Point, Rect};
    ///
    /// let r = Rect::from_corners(Point::new(10.0, 10.0), Point::new(2.0, 4.0));
    /// assert_eq!(r, Rect::new(2.0, 4.0, 8.0, 6.0));
    /// ```
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// The X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Checks whether a point lies inside the rectangle. Points on the
    /// boundary count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}
