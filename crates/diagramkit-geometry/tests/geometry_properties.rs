//! Property-based tests for the geometry invariants.

use diagramkit_geometry::{
    distance, point_in_rect, point_to_rect_distance, rects_overlap, Point, Rect, Transform,
};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_rect() -> impl Strategy<Value = Rect> {
    (
        -500.0f64..500.0,
        -500.0f64..500.0,
        0.0f64..300.0,
        0.0f64..300.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Transforms with a determinant bounded away from zero, so the inverse
/// mapping stays numerically stable.
fn arb_invertible_transform() -> impl Strategy<Value = Transform> {
    (
        -5.0f64..5.0,
        -5.0f64..5.0,
        -5.0f64..5.0,
        -5.0f64..5.0,
        -200.0f64..200.0,
        -200.0f64..200.0,
    )
        .prop_map(|(a, b, c, d, e, f)| Transform::new(a, b, c, d, e, f))
        .prop_filter("determinant too close to zero", |t| {
            t.determinant().abs() > 0.01
        })
}

proptest! {
    #[test]
    fn screen_canvas_round_trip(t in arb_invertible_transform(), p in arb_point()) {
        let back = t.screen_to_canvas(t.canvas_to_screen(p));
        prop_assert!((back.x - p.x).abs() < 1e-6, "x drifted: {} vs {}", back.x, p.x);
        prop_assert!((back.y - p.y).abs() < 1e-6, "y drifted: {} vs {}", back.y, p.y);
    }

    #[test]
    fn rect_overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
    }

    #[test]
    fn rect_overlaps_itself(a in arb_rect()) {
        prop_assert!(rects_overlap(&a, &a));
    }

    #[test]
    fn distance_identity(p in arb_point()) {
        prop_assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in arb_point(), b in arb_point()) {
        prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-12);
    }

    #[test]
    fn point_inside_rect_has_zero_distance(r in arb_rect(), p in arb_point()) {
        if point_in_rect(p, &r) {
            prop_assert_eq!(point_to_rect_distance(p, &r), 0.0);
        } else {
            prop_assert!(point_to_rect_distance(p, &r) > 0.0);
        }
    }
}
