//! Derived board metrics: boundary count, interior count, exact area.
//!
//! Purpose
//! - One pure derivation from editor state to the numbers the board displays.
//!   The area comes from the Shoelace formula, never from the point counts,
//!   so Pick's identity `A = i + b/2 - 1` stays an independently verifiable
//!   cross-check rather than an assumption.
//!
//! Notes
//! - An open polygon reports `{vertex_count, 0, 0.0}`: the board shows the
//!   vertex count as a placeholder boundary figure before closure. Slightly
//!   unusual, but preserved for behavioral parity.

use std::collections::HashSet;

use serde::Serialize;

use crate::editor::PolygonEditor;
use crate::geometry::shoelace_area;
use crate::grid::LatticePoint;
use crate::lattice::{boundary_points, interior_points};

/// The displayed triple: b, i, and A.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Metrics {
    pub boundary_count: usize,
    pub interior_count: usize,
    pub area: f64,
}

impl Metrics {
    /// Signed gap `A - (i + b/2 - 1)`. Exactly zero for every simple lattice
    /// polygon by Pick's theorem (the halving is exact in f64), so anything
    /// nonzero points at an enumeration or area bug.
    pub fn pick_identity_gap(&self) -> f64 {
        self.area - (self.interior_count as f64 + self.boundary_count as f64 / 2.0 - 1.0)
    }
}

/// Metrics plus the two derived point sets, for renderers that draw them.
#[derive(Clone, Debug)]
pub struct Derived {
    pub metrics: Metrics,
    pub boundary: HashSet<LatticePoint>,
    pub interior: HashSet<LatticePoint>,
}

/// Derive the metrics alone.
pub fn compute(editor: &PolygonEditor) -> Metrics {
    compute_derived(editor).metrics
}

/// Derive metrics and point sets. Pure: two calls on an unmutated editor
/// return identical results.
pub fn compute_derived(editor: &PolygonEditor) -> Derived {
    if !editor.is_closed() {
        return Derived {
            metrics: Metrics {
                boundary_count: editor.vertex_count(),
                interior_count: 0,
                area: 0.0,
            },
            boundary: HashSet::new(),
            interior: HashSet::new(),
        };
    }
    let verts = editor.vertices();
    let boundary = boundary_points(verts);
    let interior = interior_points(verts, &boundary, editor.bounds());
    let metrics = Metrics {
        boundary_count: boundary.len(),
        interior_count: interior.len(),
        area: shoelace_area(verts),
    };
    Derived {
        metrics,
        boundary,
        interior,
    }
}
