//! Criterion benchmarks for the edit path: one drag event is a validated
//! move plus a full metric recomputation, and the board fires one per
//! pointer-move.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nalgebra::vector;
use pick::grid::GridBounds;
use pick::metrics::compute;
use pick::prelude::PolygonEditor;

fn closed_quad(n: i64) -> PolygonEditor {
    let mut ed = PolygonEditor::new(GridBounds::new(n));
    let hi = n - 2;
    for p in [
        vector![1, 1],
        vector![hi, 1],
        vector![hi, hi],
        vector![1, hi],
    ] {
        ed.add_vertex(p).expect("quad corners are valid");
    }
    ed.close().expect("quad closes");
    ed
}

fn bench_editor(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor");

    group.bench_function("drag_event_accepted", |b| {
        b.iter_batched(
            || closed_quad(11),
            |mut ed| {
                ed.move_vertex(2, vector![8, 7]).expect("valid drag");
                compute(&ed)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("drag_event_rejected", |b| {
        b.iter_batched(
            || closed_quad(11),
            |mut ed| {
                // Crossing drag: checked, rejected, then recomputed unchanged.
                let _ = ed.move_vertex(1, vector![5, 10]);
                compute(&ed)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_editor);
criterion_main!(benches);
