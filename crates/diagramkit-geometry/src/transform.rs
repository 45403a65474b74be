//! Affine transform and coordinate conversion between canvas and screen space.
//!
//! Handles conversion between screen coordinates (pointer events, rendered
//! viewport) and canvas coordinates (the zoom/pan-independent space diagram
//! content is authored in). The transform maps canvas space to screen space.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A 2D affine transform stored as the six coefficients of the matrix
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// | 0  0  1 |
/// ```
///
/// mapping canvas space to screen space. `a`/`d` carry scale, `b`/`c` skew,
/// and `e`/`f` translation. The transform is degenerate (not invertible)
/// when `a * d - b * c == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    /// The identity transform (no scale, skew, or translation).
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Creates a transform from its six coefficients.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The determinant `a * d - b * c`. Zero means the transform collapses
    /// the plane and has no inverse.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Converts canvas coordinates to screen coordinates.
    ///
    /// Formula:
    /// ```text
    /// screen_x = a * canvas_x + c * canvas_y + e
    /// screen_y = b * canvas_x + d * canvas_y + f
    /// ```
    pub fn canvas_to_screen(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Converts screen coordinates to canvas coordinates by inverting the
    /// transform.
    ///
    /// If the transform is degenerate (`determinant() == 0`) there is no
    /// inverse mapping, and the input point is returned unchanged. This is a
    /// documented fallback rather than an error: the engine never fails on
    /// numeric input.
    ///
    /// For any invertible transform,
    /// `screen_to_canvas(canvas_to_screen(p))` returns `p` up to
    /// floating-point tolerance.
    pub fn screen_to_canvas(&self, point: Point) -> Point {
        let det = self.determinant();
        if det == 0.0 {
            return point;
        }
        Point::new(
            (self.d * (point.x - self.e) - self.c * (point.y - self.f)) / det,
            (-self.b * (point.x - self.e) + self.a * (point.y - self.f)) / det,
        )
    }

    /// Composes two transforms: the result applies `other` first, then
    /// `self`.
    ///
    /// Composition is associative but not commutative; composing with
    /// [`Transform::IDENTITY`] on either side is a no-op.
    pub fn multiply(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Returns this transform with the translation components shifted by the
    /// given deltas. Scale and skew are untouched.
    pub fn translated(&self, dx: f64, dy: f64) -> Transform {
        Transform {
            e: self.e + dx,
            f: self.f + dy,
            ..*self
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
