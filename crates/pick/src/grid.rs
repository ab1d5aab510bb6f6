//! Integer grid types: lattice points and grid bounds.
//!
//! Purpose
//! - Fix the coordinate domain once: lattice points are `Vector2<i64>` and the
//!   active grid is the square `0 <= x,y < n`.
//! - Keep range checking separate from construction: any i64 pair is a valid
//!   lattice point; only the editor cares whether it lies on the active grid.

use nalgebra::Vector2;

/// A lattice point. Structural equality and hashing come from nalgebra.
pub type LatticePoint = Vector2<i64>;

/// The active grid `0 <= x,y < n`. The reference board uses n = 11, but
/// nothing in the crate depends on that value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub n: i64,
}

impl GridBounds {
    #[inline]
    pub fn new(n: i64) -> Self {
        debug_assert!(n > 0, "grid size must be positive, got {n}");
        Self { n }
    }

    #[inline]
    pub fn contains(&self, p: LatticePoint) -> bool {
        (0..self.n).contains(&p.x) && (0..self.n).contains(&p.y)
    }

    /// Clamp an inclusive coordinate range to the grid.
    #[inline]
    pub fn clamp_range(&self, lo: i64, hi: i64) -> (i64, i64) {
        (lo.max(0), hi.min(self.n - 1))
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self { n: 11 }
    }
}
