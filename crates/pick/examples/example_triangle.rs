//! Timing probe for the board's example triangle preset.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does one full
//!   edit-to-metrics cycle take on the reference 11x11 grid?", the cost the
//!   board pays on every pointer-move during a drag.

use std::time::Instant;

use nalgebra::vector;
use pick::grid::GridBounds;
use pick::metrics::compute_derived;
use pick::prelude::PolygonEditor;

fn main() {
    let mut ed = PolygonEditor::new(GridBounds::new(11));
    for p in [vector![2, 4], vector![6, 2], vector![6, 6]] {
        ed.add_vertex(p).expect("preset vertices are valid");
    }
    ed.close().expect("preset closes");

    let start = Instant::now();
    let d = compute_derived(&ed);
    let elapsed = start.elapsed().as_secs_f64() * 1e6;

    let m = d.metrics;
    println!(
        "preset=example_triangle b={} i={} area={}",
        m.boundary_count, m.interior_count, m.area
    );
    println!(
        "pick_identity: {} = {} + {}/2 - 1 (gap={})",
        m.area,
        m.interior_count,
        m.boundary_count,
        m.pick_identity_gap()
    );
    println!("compute_time_us={elapsed:.3}");
}
