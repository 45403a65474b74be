//! Integration tests for zoom anchoring, clamping, and fit-to-view.

use diagramkit_canvas::zoom::{
    clamp_zoom, wheel_zoom, zoom_at_point, zoom_level, zoom_to_fit, DEFAULT_FIT_PADDING,
};
use diagramkit_canvas::ZoomConfig;
use diagramkit_geometry::{Point, Rect, Transform};
use proptest::prelude::*;

#[test]
fn test_zoom_in_from_identity_anchored_at_point() {
    // delta = 1 from zoom 1.0 -> zoom 2.0, anchored at (100, 100)
    let config = ZoomConfig::default();
    let anchor = Point::new(100.0, 100.0);
    let zoomed = zoom_at_point(&Transform::IDENTITY, 1.0, anchor, &config);

    assert!((zoom_level(&zoomed) - 2.0).abs() < 1e-12);
    // Anchor is a fixed point: with the identity before, canvas (100,100)
    // must still land on screen (100,100)
    assert_eq!(zoomed.canvas_to_screen(anchor), anchor);
}

#[test]
fn test_consecutive_zooms_keep_anchor_fixed() {
    let config = ZoomConfig::default();
    let anchor = Point::new(320.0, 240.0);
    let mut transform = Transform::IDENTITY;

    for delta in [0.5, 0.5, -0.3, 1.0] {
        let canvas_anchor = transform.screen_to_canvas(anchor);
        let screen_before = transform.canvas_to_screen(canvas_anchor);
        transform = zoom_at_point(&transform, delta, anchor, &config);
        let screen_after = transform.canvas_to_screen(canvas_anchor);

        assert!((screen_after.x - screen_before.x).abs() < 1e-9);
        assert!((screen_after.y - screen_before.y).abs() < 1e-9);
    }
}

#[test]
fn test_zoom_never_escapes_bounds() {
    let config = ZoomConfig::default();
    let mut transform = Transform::IDENTITY;

    for _ in 0..100 {
        transform = zoom_at_point(&transform, 1.0, Point::new(50.0, 50.0), &config);
    }
    assert!((zoom_level(&transform) - config.max_zoom).abs() < 1e-9);

    for _ in 0..100 {
        transform = zoom_at_point(&transform, -1.0, Point::new(50.0, 50.0), &config);
    }
    assert!((zoom_level(&transform) - config.min_zoom).abs() < 1e-9);
}

#[test]
fn test_wheel_zoom_sensitivity_scales_with_zoom() {
    let config = ZoomConfig::default();
    let pointer = Point::new(0.0, 0.0);

    let at_1x = wheel_zoom(&Transform::IDENTITY, -100.0, pointer, &config);
    let low = Transform::new(0.5, 0.0, 0.0, 0.5, 0.0, 0.0);
    let at_half = wheel_zoom(&low, -100.0, pointer, &config);

    // Same wheel motion changes the zoom proportionally to the current level
    let gain_1x = zoom_level(&at_1x) - 1.0;
    let gain_half = zoom_level(&at_half) - 0.5;
    assert!((gain_1x - 2.0 * gain_half).abs() < 1e-12);
}

#[test]
fn test_zoom_to_fit_small_content_stays_at_100pct() {
    let content = Rect::new(0.0, 0.0, 100.0, 80.0);
    let t = zoom_to_fit(&content, 800.0, 600.0, DEFAULT_FIT_PADDING);
    assert_eq!(t.a, 1.0);
    assert_eq!(t.d, 1.0);
    // Content centered in the viewport
    assert_eq!(t.canvas_to_screen(content.center()), Point::new(400.0, 300.0));
}

#[test]
fn test_zoom_to_fit_respects_padding() {
    let content = Rect::new(50.0, 50.0, 4000.0, 1000.0);
    let padding = 20.0;
    let t = zoom_to_fit(&content, 800.0, 600.0, padding);

    // Width-bound: scale = (800 - 40) / 4000
    assert!((t.a - 0.19).abs() < 1e-12);

    let top_left = t.canvas_to_screen(Point::new(content.x, content.y));
    let bottom_right = t.canvas_to_screen(Point::new(content.right(), content.bottom()));
    assert!(top_left.x >= padding - 1e-9);
    assert!(bottom_right.x <= 800.0 - padding + 1e-9);
    assert!(top_left.y >= padding - 1e-9);
    assert!(bottom_right.y <= 600.0 - padding + 1e-9);
}

proptest! {
    #[test]
    fn zoom_level_always_within_config_bounds(
        delta in -10.0f64..10.0,
        start in 0.2f64..4.0,
        cx in -500.0f64..500.0,
        cy in -500.0f64..500.0,
    ) {
        let config = ZoomConfig::default();
        let start_transform = Transform::new(start, 0.0, 0.0, start, 0.0, 0.0);
        let zoomed = zoom_at_point(&start_transform, delta, Point::new(cx, cy), &config);
        let level = zoom_level(&zoomed);
        prop_assert!(level >= config.min_zoom - 1e-9);
        prop_assert!(level <= config.max_zoom + 1e-9);
    }

    #[test]
    fn clamp_is_idempotent(zoom in -10.0f64..10.0) {
        let config = ZoomConfig::default();
        let once = clamp_zoom(zoom, &config);
        prop_assert_eq!(clamp_zoom(once, &config), once);
    }
}
