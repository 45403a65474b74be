//! Drag-based pan control.
//!
//! A two-state machine (`Idle` / `Panning`) threaded through the host's
//! pointer events. Panning only ever touches the translation components of
//! the transform; scale and skew pass through untouched.

use serde::{Deserialize, Serialize};

use diagramkit_geometry::{Point, Rect, Transform};

/// Default boundary padding, in screen units, used with [`constrain_pan`].
pub const DEFAULT_BOUNDARY_PADDING: f64 = 100.0;

/// Pan interaction state.
///
/// Invariant: `start_point` and `last_point` are `Some` exactly while
/// `is_panning` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanState {
    pub is_panning: bool,
    pub start_point: Option<Point>,
    pub last_point: Option<Point>,
}

/// Result of a pan update: the new state and the translated transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanUpdate {
    pub state: PanState,
    pub transform: Transform,
}

impl PanState {
    /// Creates the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a pan at `point`: `Idle -> Panning`, recording the point as
    /// both start and last position.
    pub fn start(point: Point) -> Self {
        Self {
            is_panning: true,
            start_point: Some(point),
            last_point: Some(point),
        }
    }

    /// Applies a pointer move to an in-progress pan.
    ///
    /// Translates the transform by the delta from the last recorded point
    /// and advances `last_point`. A no-op (state and transform returned
    /// unchanged) when not panning.
    pub fn update(&self, point: Point, transform: &Transform) -> PanUpdate {
        let Some(last) = self.last_point.filter(|_| self.is_panning) else {
            return PanUpdate {
                state: *self,
                transform: *transform,
            };
        };

        PanUpdate {
            state: Self {
                last_point: Some(point),
                ..*self
            },
            transform: transform.translated(point.x - last.x, point.y - last.y),
        }
    }

    /// Ends the pan, returning the idle state with both points cleared.
    ///
    /// Idempotent: ending an already-idle state is a safe no-op.
    pub fn end(&self) -> Self {
        Self::default()
    }
}

/// Delta vector from `from` to `to`.
pub fn pan_delta(from: Point, to: Point) -> Point {
    Point::new(to.x - from.x, to.y - from.y)
}

/// Applies a pan delta directly to a transform's translation.
pub fn apply_pan_delta(transform: &Transform, delta: Point) -> Transform {
    transform.translated(delta.x, delta.y)
}

/// Returns a transform whose translation puts `target` (canvas coordinates)
/// at the viewport center, keeping the current scale.
pub fn center_on_point(
    target: Point,
    viewport_width: f64,
    viewport_height: f64,
    transform: &Transform,
) -> Transform {
    Transform {
        e: viewport_width / 2.0 - target.x * transform.a,
        f: viewport_height / 2.0 - target.y * transform.d,
        ..*transform
    }
}

/// Clamps a transform's translation so the content cannot be panned
/// entirely out of view.
///
/// `e` is clamped into `[viewport_width - scaled_content_width - padding,
/// padding]` and `f` analogously. This is a pure post-processing step; the
/// host applies it after [`PanState::update`] when boundary enforcement is
/// wanted. It is never invoked automatically.
pub fn constrain_pan(
    transform: &Transform,
    content_bounds: &Rect,
    viewport_width: f64,
    viewport_height: f64,
    padding: f64,
) -> Transform {
    let scaled_width = content_bounds.width * transform.a;
    let scaled_height = content_bounds.height * transform.d;

    let min_x = viewport_width - scaled_width - padding;
    let min_y = viewport_height - scaled_height - padding;

    Transform {
        e: min_x.max(padding.min(transform.e)),
        f: min_y.max(padding.min(transform.f)),
        ..*transform
    }
}
