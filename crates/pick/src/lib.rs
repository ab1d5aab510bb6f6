//! Lattice-polygon geometry engine for Pick's theorem boards.
//!
//! Purpose
//! - Model a simple polygon drawn on an integer grid: validated interactive
//!   edits, boundary/interior lattice point enumeration, and exact Shoelace
//!   area, with Pick's identity `A = i + b/2 - 1` exposed as a verifiable
//!   cross-check rather than an assumption.
//! - Stay renderer-agnostic: the UI owns pixels and gestures; this crate owns
//!   the lattice math and the validity rules.
//!
//! Layout
//! - `grid`: lattice points and grid bounds.
//! - `geometry`: integer-exact primitives (gcd, crossings, ray cast, area).
//! - `lattice`: boundary/interior set enumeration.
//! - `editor`: the polygon state machine with rejection semantics.
//! - `metrics`: derived counts, area, and the Pick identity gap.
//! - `rand`: seeded convex lattice polygons for tests and benches.

pub mod editor;
pub mod geometry;
pub mod grid;
pub mod lattice;
pub mod metrics;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::editor::{EditReject, EditorState, PolygonEditor};
    pub use crate::grid::{GridBounds, LatticePoint};
    pub use crate::metrics::{compute, compute_derived, Derived, Metrics};
    pub use crate::rand::{draw_convex_lattice_polygon, HullCfg, ReplayToken, SampleCount};
}
