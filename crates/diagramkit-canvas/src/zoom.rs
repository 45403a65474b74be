//! Zoom control for the canvas transform.
//!
//! All operations are transform-in, transform-out: the host applies the
//! returned transform as its rendering transform and passes it back on the
//! next interaction. Zoom level is read from the matrix itself, so the
//! controller keeps no state of its own.

use diagramkit_geometry::{Point, Rect, Transform};
use tracing::trace;

use crate::config::ZoomConfig;

/// Default padding, in screen units, left around content by [`zoom_to_fit`].
pub const DEFAULT_FIT_PADDING: f64 = 20.0;

/// Extracts the zoom level from a transform as `sqrt(a² + b²)`.
///
/// This treats the transform as uniformly scaled (possibly rotated);
/// independently skewed X/Y scaling is not a supported "zoom level".
pub fn zoom_level(transform: &Transform) -> f64 {
    (transform.a * transform.a + transform.b * transform.b).sqrt()
}

/// Clamps a zoom level into `[config.min_zoom, config.max_zoom]`.
pub fn clamp_zoom(zoom: f64, config: &ZoomConfig) -> f64 {
    config.min_zoom.max(config.max_zoom.min(zoom))
}

/// Zooms by `zoom_delta` anchored at `center` (screen coordinates).
///
/// The new zoom level is `clamp_zoom(zoom_level(transform) + zoom_delta)`.
/// When the clamped level equals the current one the input transform is
/// returned unchanged, avoiding needless matrix churn. Otherwise a scale
/// matrix anchored at `center`
///
/// ```text
/// | s  0  center.x * (1 - s) |
/// | 0  s  center.y * (1 - s) |
/// ```
///
/// is left-multiplied onto the transform. `center` is a fixed point of the
/// operation: it maps to the same screen position before and after.
pub fn zoom_at_point(
    transform: &Transform,
    zoom_delta: f64,
    center: Point,
    config: &ZoomConfig,
) -> Transform {
    let current_zoom = zoom_level(transform);
    let new_zoom = clamp_zoom(current_zoom + zoom_delta, config);
    let scale = new_zoom / current_zoom;

    if scale == 1.0 {
        return *transform;
    }

    trace!(from = current_zoom, to = new_zoom, "zoom at point");

    let scale_matrix = Transform {
        a: scale,
        b: 0.0,
        c: 0.0,
        d: scale,
        e: center.x * (1.0 - scale),
        f: center.y * (1.0 - scale),
    };
    scale_matrix.multiply(transform)
}

/// Zooms from a wheel event, anchored at the pointer position.
///
/// The zoom delta is `-wheel_delta * config.wheel_zoom_factor * zoom_level`;
/// scaling the step by the current zoom keeps wheel sensitivity feeling
/// constant across zoom levels.
pub fn wheel_zoom(
    transform: &Transform,
    wheel_delta: f64,
    pointer: Point,
    config: &ZoomConfig,
) -> Transform {
    let zoom_delta = -wheel_delta * config.wheel_zoom_factor * zoom_level(transform);
    zoom_at_point(transform, zoom_delta, pointer, config)
}

/// Builds a transform that fits `content_bounds` into the viewport with the
/// given padding on every side, centered.
///
/// The scale is `min(available_w / content_w, available_h / content_h, 1)`.
/// The final `1` is deliberate policy: never zoom in past 100% just to fill
/// empty viewport space.
pub fn zoom_to_fit(
    content_bounds: &Rect,
    viewport_width: f64,
    viewport_height: f64,
    padding: f64,
) -> Transform {
    let available_width = viewport_width - padding * 2.0;
    let available_height = viewport_height - padding * 2.0;

    let scale_x = available_width / content_bounds.width;
    let scale_y = available_height / content_bounds.height;
    let scale = scale_x.min(scale_y).min(1.0);

    let offset_x = (viewport_width - content_bounds.width * scale) / 2.0 - content_bounds.x * scale;
    let offset_y =
        (viewport_height - content_bounds.height * scale) / 2.0 - content_bounds.y * scale;

    Transform {
        a: scale,
        b: 0.0,
        c: 0.0,
        d: scale,
        e: offset_x,
        f: offset_y,
    }
}

/// Resets zoom and pan: returns the identity transform.
pub fn reset_zoom() -> Transform {
    Transform::IDENTITY
}
