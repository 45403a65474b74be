//! Benchmarks for the linear-scan selection paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diagramkit_canvas::selection::hit_test;
use diagramkit_canvas::{SelectableItem, SelectionMode, SelectionState};
use diagramkit_geometry::{Point, Rect};

fn make_items(count: usize) -> Vec<SelectableItem> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f64 * 15.0;
            let y = (i / 100) as f64 * 15.0;
            SelectableItem::new(i as u64, Rect::new(x, y, 10.0, 10.0))
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let items = make_items(1000);
    // Worst case for the reverse scan: point over the first item
    let point = Point::new(5.0, 5.0);

    c.bench_function("hit_test_1000_items", |b| {
        b.iter(|| hit_test(black_box(&items), black_box(point)))
    });
}

fn bench_end_box(c: &mut Criterion) {
    let items = make_items(1000);
    let state = SelectionState::new()
        .start_box(Point::new(0.0, 0.0))
        .update_box(Point::new(500.0, 75.0));

    c.bench_function("end_box_1000_items", |b| {
        b.iter(|| {
            black_box(&state)
                .end_box(black_box(&items), SelectionMode::Single)
                .selected_ids
                .len()
        })
    });
}

criterion_group!(benches, bench_hit_test, bench_end_box);
criterion_main!(benches);
